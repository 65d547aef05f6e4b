// ==========================================
// 水产养殖绩效指标引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、派生对象与共享类型
// 红线: 不含数据访问逻辑,不含引擎逻辑;
//       实体由调用方持有,引擎借用计算后返回全新派生对象
// ==========================================

pub mod fcr;
pub mod feeding;
pub mod growth;
pub mod stock;
pub mod types;

// 重导出核心类型
pub use fcr::{FcrDataPoint, FcrSeriesPoint, FcrStatus, FcrTrendSummary};
pub use feeding::{
    DailyFeedingPattern, FeedTypeUsage, FeedingEvent, FeedingSummary, PerformanceMetrics,
};
pub use growth::{FishObservation, GrowthSample, GrowthSampleStats, GrowthTrendPoint};
pub use stock::{ConsumptionReport, FeedStockEntry, FifoViolationWarning, LotDraw, StockLot};
pub use types::{ConfidenceLevel, FcrPerformance, FeedingMethod, TrendDirection};
