// ==========================================
// 水产养殖绩效指标引擎 - FCR 趋势领域模型
// ==========================================
// 职责: FCR 序列点的输入/输出形态与窗口汇总快照
// 红线: 偏差符号约定 deviation = actual - predicted,
//       正值 = 实际劣于预测,驱动上游红绿展示,不得翻转
// ==========================================

use crate::domain::types::ConfidenceLevel;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// FcrSeriesPoint - FCR 序列输入点
// ==========================================
// 称重新近度随点传入,不落在点上存储
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcrSeriesPoint {
    pub period_start: NaiveDate,          // 周期起始 (≤ period_end)
    pub period_end: NaiveDate,            // 周期结束
    pub actual_fcr: Option<f64>,          // 实际 FCR
    pub predicted_fcr: Option<f64>,       // 预测 FCR
    pub scenarios_used: i64,              // 参与预测的情景数 (≥0)
    pub days_since_weighing: Option<i64>, // 距上次称重天数 (缺失=来源未知)
    pub weighed_in_period: bool,          // 称重是否落在本期内
}

// ==========================================
// FcrDataPoint - FCR 趋势输出点 (派生)
// ==========================================
// 置信度与偏差已按规则标注
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcrDataPoint {
    pub period_start: NaiveDate,      // 周期起始
    pub period_end: NaiveDate,        // 周期结束
    pub actual_fcr: Option<f64>,      // 实际 FCR
    pub predicted_fcr: Option<f64>,   // 预测 FCR
    pub confidence: ConfidenceLevel,  // 置信度等级
    pub deviation: Option<f64>,       // actual - predicted (任一缺失则 None)
    pub scenarios_used: i64,          // 参与预测的情景数
}

// ==========================================
// FcrTrendSummary - 窗口汇总统计 (派生)
// ==========================================
// 空窗口各统计量独立返回 0 (非 None) - 与统计原语的约定不同,
// 为保持展示层兼容而固定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcrTrendSummary {
    pub actual_point_count: i64,     // 实际 FCR 非空的点数
    pub avg_scenarios_used: f64,     // scenarios_used 均值 (对窗口内全部点)
    pub high_confidence_count: i64,  // 置信度 ∈ {VERY_HIGH, HIGH} 的点数
    pub mean_abs_deviation: f64,     // 偏差绝对值均值 (仅偏差非空的点)
}

// ==========================================
// FcrStatus - 当前 FCR 状态卡 (派生)
// ==========================================
// 依据最新周期汇总的 FCR 与其更新时间新近度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FcrStatus {
    pub current_fcr: Option<f64>,            // 最新汇总的 FCR (无汇总时 None)
    pub confidence: ConfidenceLevel,         // 按汇总更新时间新近度分级
    pub last_updated: Option<DateTime<Utc>>, // 最新汇总更新时间
}
