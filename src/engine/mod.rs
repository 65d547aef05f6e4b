// ==========================================
// 水产养殖绩效指标引擎 - 引擎层
// ==========================================
// 职责: 实现绩效指标业务规则,单线程纯函数
// 红线: 引擎不发起请求、不读系统时钟、不跨调用保留引用;
//       相同输入序列的重跑输出逐字节一致
// ==========================================

pub mod error;
pub mod fcr_trend;
pub mod feed_aggregator;
pub mod growth_analyzer;
pub mod performance;
pub mod stats;
pub mod stock_ledger;
pub mod validation;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use fcr_trend::FcrTrendEngine;
pub use feed_aggregator::FeedConsumptionAggregator;
pub use growth_analyzer::GrowthSampleAnalyzer;
pub use performance::PerformanceMetricsEngine;
pub use stock_ledger::{total_inventory_value, FeedStockLedger};
