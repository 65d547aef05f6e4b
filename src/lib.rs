// ==========================================
// 水产养殖绩效指标引擎 - 核心库
// ==========================================
// 系统定位: 运营仪表盘的共享指标计算层 (单一事实来源)
// 技术栈: Rust + serde + chrono + tracing
// 红线: 纯同步转换,不含持久化/网络 IO;
//       各消费视图统一调用本库,不在界面侧内联重算
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 分析参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ConfidenceLevel, FcrPerformance, FeedingMethod, TrendDirection};

// 领域实体
pub use domain::{
    ConsumptionReport, DailyFeedingPattern, FcrDataPoint, FcrSeriesPoint, FcrStatus,
    FcrTrendSummary, FeedStockEntry, FeedTypeUsage, FeedingEvent, FeedingSummary,
    FifoViolationWarning, FishObservation, GrowthSample, GrowthSampleStats, GrowthTrendPoint,
    LotDraw, PerformanceMetrics, StockLot,
};

// 引擎
pub use engine::{
    EngineError, EngineResult, FcrTrendEngine, FeedConsumptionAggregator, FeedStockLedger,
    GrowthSampleAnalyzer, PerformanceMetricsEngine,
};

// 配置
pub use config::AnalysisProfile;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "水产养殖绩效指标引擎";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
