use serde::{Deserialize, Serialize};

use crate::engine::fcr_trend::{DEFAULT_TREND_EPSILON, DEFAULT_TREND_WINDOW_DAYS};
use crate::engine::feed_aggregator::DEFAULT_PATTERN_WINDOW_DAYS;

/// 分析参数配置（轻量版：只覆盖调用方可调的窗口/死区维度）
///
/// 置信度阈值 (20/40 天) 与 FCR 分档 (1.0/1.2/1.5) 是产品既定规则,
/// 不在此暴露为配置项
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisProfile {
    /// FCR 趋势回看窗口（天,如 30/90/180/365）
    #[serde(default)]
    pub trend_window_days: Option<i64>,

    /// 按日投喂分布保留的日历日数
    #[serde(default)]
    pub pattern_window_days: Option<usize>,

    /// 趋势方向判定死区
    #[serde(default)]
    pub trend_epsilon: Option<f64>,

    /// 无周期汇总时的回退 FCR
    #[serde(default)]
    pub fallback_fcr: Option<f64>,
}

impl AnalysisProfile {
    /// 生效的趋势回看窗口
    pub fn effective_trend_window_days(&self) -> i64 {
        self.trend_window_days.unwrap_or(DEFAULT_TREND_WINDOW_DAYS)
    }

    /// 生效的按日分布保留天数
    pub fn effective_pattern_window_days(&self) -> usize {
        self.pattern_window_days.unwrap_or(DEFAULT_PATTERN_WINDOW_DAYS)
    }

    /// 生效的趋势死区
    pub fn effective_trend_epsilon(&self) -> f64 {
        self.trend_epsilon.unwrap_or(DEFAULT_TREND_EPSILON)
    }
}
