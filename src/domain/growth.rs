// ==========================================
// 水产养殖绩效指标引擎 - 生长采样领域模型
// ==========================================
// 职责: 生长采样与个体鱼观测的规范形态,及按需重算的统计快照
// 红线: 派生统计不落在样本上冗余存储,一律按观测重算
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// FishObservation - 个体鱼观测
// ==========================================
// 归属: 恰好一个 GrowthSample
// 缺失体重或体长的观测被所有聚合排除,但不使样本失效
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishObservation {
    pub fish_identifier: String,  // 个体鱼编号
    pub weight_g: Option<f64>,    // 体重 (g, >0)
    pub length_cm: Option<f64>,   // 体长 (cm, >0)
}

impl FishObservation {
    /// 该观测是否参与聚合 (体重体长均存在且为正)
    pub fn is_measurable(&self) -> bool {
        matches!((self.weight_g, self.length_cm), (Some(w), Some(l)) if w > 0.0 && l > 0.0)
    }

    /// 个体肥满度 K = (体重 / 体长³) × 100
    ///
    /// # 返回
    /// 缺失测量值时返回 None
    pub fn condition_factor(&self) -> Option<f64> {
        if !self.is_measurable() {
            return None;
        }
        let w = self.weight_g?;
        let l = self.length_cm?;
        Some(w / (l * l * l) * 100.0)
    }
}

// ==========================================
// GrowthSample - 生长采样
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSample {
    pub id: i64,                          // 采样唯一标识
    pub sample_date: NaiveDate,           // 采样日期
    pub sample_size: i64,                 // 计划采样尾数 (≥1)
    pub observations: Vec<FishObservation>, // 个体观测列表
}

// ==========================================
// GrowthSampleStats - 样本统计快照 (派生)
// ==========================================
// 零有效观测的样本产出全 None 快照,不报错
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSampleStats {
    pub sample_id: i64,                    // 对应采样 ID
    pub sample_date: NaiveDate,            // 采样日期
    pub measured_count: i64,               // 参与聚合的观测数
    pub avg_weight_g: Option<f64>,         // 平均体重 (g)
    pub avg_length_cm: Option<f64>,        // 平均体长 (cm)
    pub std_dev_weight: Option<f64>,       // 体重总体标准差
    pub std_dev_length: Option<f64>,       // 体长总体标准差
    pub min_weight: Option<f64>,           // 最小体重
    pub max_weight: Option<f64>,           // 最大体重
    pub min_length: Option<f64>,           // 最小体长
    pub max_length: Option<f64>,           // 最大体长
    pub avg_condition_factor: Option<f64>, // 平均肥满度 (逐尾 K 的均值,非均值的 K)
}

// ==========================================
// GrowthTrendPoint - 生长趋势点 (派生)
// ==========================================
// 按采样日期升序的序列点,生长率折算为周口径
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthTrendPoint {
    pub sample_date: NaiveDate,            // 采样日期
    pub avg_weight_g: Option<f64>,         // 平均体重 (g)
    pub growth_rate_pct: f64,              // 周生长率 (%, 首点为 0)
    pub condition_factor: Option<f64>,     // 平均肥满度
}
