// ==========================================
// 水产养殖绩效指标引擎 - 领域类型定义
// ==========================================
// 职责: 定义引擎共享的枚举类型
// 红线: 未识别的置信度字符串回退 LOW,不丢弃数据点
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 投喂方式 (Feeding Method)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与上游 API 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedingMethod {
    Manual,    // 人工投喂
    Automatic, // 自动投喂机
    Broadcast, // 撒播投喂
}

impl fmt::Display for FeedingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedingMethod::Manual => write!(f, "MANUAL"),
            FeedingMethod::Automatic => write!(f, "AUTOMATIC"),
            FeedingMethod::Broadcast => write!(f, "BROADCAST"),
        }
    }
}

impl FeedingMethod {
    /// 从字符串解析投喂方式
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "AUTOMATIC" => FeedingMethod::Automatic,
            "BROADCAST" => FeedingMethod::Broadcast,
            _ => FeedingMethod::Manual, // 默认值
        }
    }
}

// ==========================================
// FCR 置信度等级 (Confidence Level)
// ==========================================
// 依据称重事件的新近度分级
// 顺序: Low < Medium < High < VeryHigh
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    Low,      // 距上次称重 >40 天,或来源未知
    Medium,   // 距上次称重 21-40 天
    High,     // 距上次称重 ≤20 天
    VeryHigh, // 称重落在本期内
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::Low => write!(f, "LOW"),
            ConfidenceLevel::Medium => write!(f, "MEDIUM"),
            ConfidenceLevel::High => write!(f, "HIGH"),
            ConfidenceLevel::VeryHigh => write!(f, "VERY_HIGH"),
        }
    }
}

impl ConfidenceLevel {
    /// 从字符串解析置信度等级
    ///
    /// 未识别/缺失的字符串回退为 Low(失败安全),数据点本身不丢弃
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().replace(' ', "_").as_str() {
            "VERY_HIGH" => ConfidenceLevel::VeryHigh,
            "HIGH" => ConfidenceLevel::High,
            "MEDIUM" => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low, // 默认值
        }
    }

    /// 是否为高可信等级 (VeryHigh / High)
    pub fn is_high_confidence(&self) -> bool {
        matches!(self, ConfidenceLevel::VeryHigh | ConfidenceLevel::High)
    }
}

// ==========================================
// FCR 表现分级 (FCR Performance)
// ==========================================
// 固定业务分档: <1.0 优秀, <1.2 良好, <1.5 一般, 其余低效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FcrPerformance {
    Excellent,   // 行业领先
    Good,        // 达标
    Average,     // 需关注优化
    Inefficient, // 饲料用量超标
}

impl fmt::Display for FcrPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FcrPerformance::Excellent => write!(f, "EXCELLENT"),
            FcrPerformance::Good => write!(f, "GOOD"),
            FcrPerformance::Average => write!(f, "AVERAGE"),
            FcrPerformance::Inefficient => write!(f, "INEFFICIENT"),
        }
    }
}

impl FcrPerformance {
    /// 按固定分档归类 FCR 值 (上界为开区间)
    pub fn classify(fcr: f64) -> Self {
        if fcr < 1.0 {
            FcrPerformance::Excellent
        } else if fcr < 1.2 {
            FcrPerformance::Good
        } else if fcr < 1.5 {
            FcrPerformance::Average
        } else {
            FcrPerformance::Inefficient
        }
    }
}

// ==========================================
// 趋势方向 (Trend Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Up,     // FCR 上行(效率变差)
    Down,   // FCR 下行(效率变好)
    Stable, // 平稳
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "UP"),
            TrendDirection::Down => write!(f, "DOWN"),
            TrendDirection::Stable => write!(f, "STABLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_from_str_fallback() {
        assert_eq!(ConfidenceLevel::from_str("VERY_HIGH"), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_str("very high"), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_str("HIGH"), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_str("MEDIUM"), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_str("LOW"), ConfidenceLevel::Low);
        // 未识别字符串回退 Low
        assert_eq!(ConfidenceLevel::from_str("GARBAGE"), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_str(""), ConfidenceLevel::Low);
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(ConfidenceLevel::VeryHigh > ConfidenceLevel::High);
        assert!(ConfidenceLevel::High > ConfidenceLevel::Medium);
        assert!(ConfidenceLevel::Medium > ConfidenceLevel::Low);
    }

    #[test]
    fn test_fcr_performance_bands() {
        assert_eq!(FcrPerformance::classify(0.95), FcrPerformance::Excellent);
        assert_eq!(FcrPerformance::classify(1.0), FcrPerformance::Good);
        assert_eq!(FcrPerformance::classify(1.19), FcrPerformance::Good);
        assert_eq!(FcrPerformance::classify(1.2), FcrPerformance::Average);
        assert_eq!(FcrPerformance::classify(1.5), FcrPerformance::Inefficient);
        assert_eq!(FcrPerformance::classify(2.3), FcrPerformance::Inefficient);
    }

    #[test]
    fn test_feeding_method_from_str() {
        assert_eq!(FeedingMethod::from_str("AUTOMATIC"), FeedingMethod::Automatic);
        assert_eq!(FeedingMethod::from_str("broadcast"), FeedingMethod::Broadcast);
        // 未识别回退人工投喂
        assert_eq!(FeedingMethod::from_str("UNKNOWN"), FeedingMethod::Manual);
    }
}
