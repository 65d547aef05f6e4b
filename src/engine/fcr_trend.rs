// ==========================================
// 水产养殖绩效指标引擎 - FCR 趋势引擎
// ==========================================
// 职责: FCR 数据点的归并、置信度分级、窗口过滤与汇总统计
// 输入: FCR 序列点 + 注入的参考日期
// 输出: 标注后的趋势点 / 窗口汇总 / 趋势方向 / 当前状态卡
// 红线: 20/40 天阈值与未知字符串回退 LOW 是产品既定规则,
//       原样保留,不做"改进"
// ==========================================

use crate::domain::fcr::{FcrDataPoint, FcrSeriesPoint, FcrStatus, FcrTrendSummary};
use crate::domain::feeding::FeedingSummary;
use crate::domain::types::{ConfidenceLevel, TrendDirection};
use crate::engine::error::EngineResult;
use crate::engine::validation::{validate_fcr_series_point, validate_feeding_summary};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

// ==========================================
// 分级阈值 (固定业务规则)
// ==========================================

/// HIGH 档上限: 距上次称重 ≤20 天
pub const CONFIDENCE_HIGH_MAX_DAYS: i64 = 20;
/// MEDIUM 档上限: 距上次称重 21-40 天
pub const CONFIDENCE_MEDIUM_MAX_DAYS: i64 = 40;

/// 状态卡 VERY_HIGH 档上限: 汇总更新 ≤10 天
pub const STATUS_VERY_HIGH_MAX_DAYS: i64 = 10;

/// 趋势方向判定的默认死区
pub const DEFAULT_TREND_EPSILON: f64 = 0.05;
/// 默认回看窗口 (天)
pub const DEFAULT_TREND_WINDOW_DAYS: i64 = 90;

// ==========================================
// FcrTrendEngine - FCR 趋势引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数;参考日期一律注入,不读系统时钟
pub struct FcrTrendEngine;

impl FcrTrendEngine {
    /// 创建新的趋势引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 置信度分级
    // ==========================================

    /// 按称重新近度分级置信度
    ///
    /// 规则 (可解释):
    /// - VERY_HIGH: 称重落在本期内
    /// - HIGH:      距上次称重 ≤20 天
    /// - MEDIUM:    距上次称重 21-40 天
    /// - LOW:       距上次称重 >40 天,或新近度未知
    ///
    /// # 参数
    /// - `days_since_weighing`: 距上次称重天数 (None = 来源未知)
    /// - `weighed_in_period`: 称重是否落在数据点自身周期内
    pub fn classify_confidence(
        &self,
        days_since_weighing: Option<i64>,
        weighed_in_period: bool,
    ) -> ConfidenceLevel {
        if weighed_in_period {
            return ConfidenceLevel::VeryHigh;
        }
        match days_since_weighing {
            Some(days) if days <= CONFIDENCE_HIGH_MAX_DAYS => ConfidenceLevel::High,
            Some(days) if days <= CONFIDENCE_MEDIUM_MAX_DAYS => ConfidenceLevel::Medium,
            Some(_) => ConfidenceLevel::Low,
            None => ConfidenceLevel::Low, // 失败安全: 未知新近度归最低档
        }
    }

    /// 偏差 = actual - predicted (任一缺失则 None)
    ///
    /// 符号约定: 正值 = 实际 FCR 超出预测 (饲料效率劣于预期)
    pub fn deviation(&self, actual_fcr: Option<f64>, predicted_fcr: Option<f64>) -> Option<f64> {
        match (actual_fcr, predicted_fcr) {
            (Some(actual), Some(predicted)) => Some(actual - predicted),
            _ => None,
        }
    }

    // ==========================================
    // 序列归并与标注
    // ==========================================

    /// 归并实际与预测两条序列
    ///
    /// 按 (period_start, period_end) 对齐;只出现在单侧的周期,
    /// 另一侧字段为 None;输出按周期起始升序
    ///
    /// # 参数
    /// - `actual`: 实际序列 (携带称重新近度)
    /// - `predicted`: 预测序列
    pub fn merge_series(
        &self,
        actual: &[FcrSeriesPoint],
        predicted: &[FcrSeriesPoint],
    ) -> Vec<FcrSeriesPoint> {
        let mut merged: BTreeMap<(NaiveDate, NaiveDate), FcrSeriesPoint> = BTreeMap::new();

        for point in actual {
            merged.insert((point.period_start, point.period_end), point.clone());
        }

        for point in predicted {
            let key = (point.period_start, point.period_end);
            match merged.get_mut(&key) {
                Some(existing) => {
                    // 预测值与情景数来自预测侧,称重新近度保留实际侧
                    existing.predicted_fcr = point.predicted_fcr;
                    existing.scenarios_used = point.scenarios_used;
                }
                None => {
                    merged.insert(key, point.clone());
                }
            }
        }

        merged.into_values().collect()
    }

    /// 标注序列点: 应用置信度分级与偏差
    ///
    /// # 返回
    /// 标注后的趋势点;聚合级计算,任一点非法时整体中止
    pub fn classify_points(&self, points: &[FcrSeriesPoint]) -> EngineResult<Vec<FcrDataPoint>> {
        for point in points {
            validate_fcr_series_point(point)?;
        }

        let classified = points
            .iter()
            .map(|point| FcrDataPoint {
                period_start: point.period_start,
                period_end: point.period_end,
                actual_fcr: point.actual_fcr,
                predicted_fcr: point.predicted_fcr,
                confidence: self
                    .classify_confidence(point.days_since_weighing, point.weighed_in_period),
                deviation: self.deviation(point.actual_fcr, point.predicted_fcr),
                scenarios_used: point.scenarios_used,
            })
            .collect::<Vec<_>>();

        tracing::debug!(points = classified.len(), "FCR 序列标注完成");

        Ok(classified)
    }

    // ==========================================
    // 窗口过滤
    // ==========================================

    /// 按回看窗口过滤趋势点
    ///
    /// 保留 period_start ∈ [reference - window_days, reference] 的点,
    /// 点本身原样透传,不做插值补洞
    ///
    /// # 参数
    /// - `points`: 标注后的趋势点
    /// - `window_days`: 回看窗口天数 (如 30/90/180/365)
    /// - `reference`: 注入的参考日期 (引擎不读系统时钟)
    pub fn filter_window(
        &self,
        points: &[FcrDataPoint],
        window_days: i64,
        reference: NaiveDate,
    ) -> Vec<FcrDataPoint> {
        let cutoff = reference - Duration::days(window_days);
        points
            .iter()
            .filter(|p| p.period_start >= cutoff && p.period_start <= reference)
            .cloned()
            .collect()
    }

    // ==========================================
    // 窗口汇总统计
    // ==========================================

    /// 计算窗口汇总统计
    ///
    /// 空窗口各统计量独立返回 0 (非 None) - 为保持展示层兼容而固定
    pub fn summarize(&self, points: &[FcrDataPoint]) -> FcrTrendSummary {
        let actual_point_count = points.iter().filter(|p| p.actual_fcr.is_some()).count() as i64;

        let avg_scenarios_used = if points.is_empty() {
            0.0
        } else {
            points.iter().map(|p| p.scenarios_used as f64).sum::<f64>() / points.len() as f64
        };

        let high_confidence_count = points
            .iter()
            .filter(|p| p.confidence.is_high_confidence())
            .count() as i64;

        let deviations: Vec<f64> = points.iter().filter_map(|p| p.deviation).collect();
        let mean_abs_deviation = if deviations.is_empty() {
            0.0
        } else {
            deviations.iter().map(|d| d.abs()).sum::<f64>() / deviations.len() as f64
        };

        FcrTrendSummary {
            actual_point_count,
            avg_scenarios_used,
            high_confidence_count,
            mean_abs_deviation,
        }
    }

    // ==========================================
    // 趋势方向
    // ==========================================

    /// 判定近期趋势方向
    ///
    /// 取末尾 3 个点中实际 FCR 非空者,不足 2 个判 Stable;
    /// 末值相对首值超出死区 ±epsilon 判 Up/Down
    pub fn trend_direction(&self, points: &[FcrDataPoint], epsilon: f64) -> TrendDirection {
        let recent = if points.len() > 3 {
            &points[points.len() - 3..]
        } else {
            points
        };
        let valid: Vec<f64> = recent.iter().filter_map(|p| p.actual_fcr).collect();

        if valid.len() < 2 {
            return TrendDirection::Stable;
        }

        let first = valid[0];
        let last = valid[valid.len() - 1];

        if last > first + epsilon {
            TrendDirection::Up
        } else if last < first - epsilon {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        }
    }

    // ==========================================
    // 当前状态卡
    // ==========================================

    /// 依据最新周期汇总生成当前 FCR 状态
    ///
    /// 置信度按汇总更新时间相对参考日期的新近度分级:
    /// ≤10 天 VERY_HIGH, ≤20 天 HIGH, ≤40 天 MEDIUM, 其余 LOW
    ///
    /// # 参数
    /// - `summaries`: 周期投喂汇总集合
    /// - `reference`: 注入的参考日期
    ///
    /// # 返回
    /// 当前状态卡;无汇总时 current_fcr 为 None,置信度 LOW
    pub fn current_status(
        &self,
        summaries: &[FeedingSummary],
        reference: NaiveDate,
    ) -> EngineResult<FcrStatus> {
        for summary in summaries {
            validate_feeding_summary(summary)?;
        }

        let latest = summaries
            .iter()
            .max_by_key(|s| (s.period_end, s.id));

        let Some(latest) = latest else {
            return Ok(FcrStatus {
                current_fcr: None,
                confidence: ConfidenceLevel::Low,
                last_updated: None,
            });
        };

        let days_since_update = (reference - latest.updated_at.date_naive()).num_days();
        let confidence = if days_since_update <= STATUS_VERY_HIGH_MAX_DAYS {
            ConfidenceLevel::VeryHigh
        } else if days_since_update <= CONFIDENCE_HIGH_MAX_DAYS {
            ConfidenceLevel::High
        } else if days_since_update <= CONFIDENCE_MEDIUM_MAX_DAYS {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        };

        Ok(FcrStatus {
            current_fcr: Some(latest.fcr),
            confidence,
            last_updated: Some(latest.updated_at),
        })
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for FcrTrendEngine {
    fn default() -> Self {
        Self::new()
    }
}
