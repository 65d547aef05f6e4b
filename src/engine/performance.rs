// ==========================================
// 水产养殖绩效指标引擎 - 绩效汇总引擎
// ==========================================
// 职责: 组合各聚合结果为展示层消费的汇总指标
// 输入: 时间窗内投喂事件 + 周期汇总 + 注入的参考日期
// 输出: PerformanceMetrics
// 红线: 纯组合,不回调数据层;各展示入口共用本引擎,
//       不在调用侧重复推导同类总量
// ==========================================

use crate::domain::feeding::{FeedingEvent, FeedingSummary, PerformanceMetrics};
use crate::domain::types::FcrPerformance;
use crate::engine::error::EngineResult;
use crate::engine::stats;
use crate::engine::validation::{validate_feeding_event, validate_feeding_summary};
use chrono::NaiveDate;

// ==========================================
// PerformanceMetricsEngine - 绩效汇总引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct PerformanceMetricsEngine;

impl PerformanceMetricsEngine {
    /// 创建新的绩效引擎
    pub fn new() -> Self {
        Self
    }

    /// 计算绩效汇总指标
    ///
    /// # 参数
    /// - `events`: 时间窗内投喂事件集合
    /// - `summaries`: 周期投喂汇总集合 (取周期最新者的 FCR)
    /// - `batch_start_date`: 批次起始日期
    /// - `reference_date`: 注入的参考日期 (引擎不读系统时钟)
    /// - `current_biomass_kg`: 当前批次生物量 (可缺失)
    /// - `fallback_fcr`: 无汇总时的调用方回退 FCR
    ///
    /// # 返回
    /// 绩效汇总指标;聚合级计算,任一记录非法时整体中止
    pub fn compute(
        &self,
        events: &[FeedingEvent],
        summaries: &[FeedingSummary],
        batch_start_date: NaiveDate,
        reference_date: NaiveDate,
        current_biomass_kg: Option<f64>,
        fallback_fcr: Option<f64>,
    ) -> EngineResult<PerformanceMetrics> {
        for event in events {
            validate_feeding_event(event)?;
        }
        for summary in summaries {
            validate_feeding_summary(summary)?;
        }

        // 1. 投喂总量与成本
        let total_feed_consumed_kg: f64 = events.iter().map(|e| e.amount_kg).sum();
        let total_feed_cost: f64 = events.iter().map(|e| e.feed_cost).sum();

        // 2. 日均投喂量 (批次起始天数 ≤0 时为 None)
        let days_since_start = (reference_date - batch_start_date).num_days();
        let average_daily_feed_kg = if days_since_start > 0 {
            stats::safe_divide(total_feed_consumed_kg, days_since_start as f64)
        } else {
            None
        };

        // 3. 当前 FCR: 周期最新汇总,缺失时取调用方回退值
        let feed_conversion_ratio = summaries
            .iter()
            .max_by_key(|s| (s.period_end, s.id))
            .map(|s| s.fcr)
            .or(fallback_fcr);

        // 4. 饲料效率 % = 100 / FCR (FCR 缺失或 ≤0 时为 None)
        let feed_efficiency_pct = match feed_conversion_ratio {
            Some(fcr) if fcr > 0.0 => stats::safe_divide(100.0, fcr),
            _ => None,
        };

        // 5. 每公斤鱼成本 (生物量缺失或 ≤0 时为 None)
        let cost_per_kg_fish = match current_biomass_kg {
            Some(biomass) if biomass > 0.0 => stats::safe_divide(total_feed_cost, biomass),
            _ => None,
        };

        // 6. FCR 表现分级
        let fcr_classification = feed_conversion_ratio.map(FcrPerformance::classify);

        tracing::debug!(
            events = events.len(),
            total_feed_consumed_kg,
            days_since_start,
            "绩效汇总计算完成"
        );

        Ok(PerformanceMetrics {
            total_feed_consumed_kg,
            total_feed_cost,
            events_count: events.len() as i64,
            days_since_start,
            average_daily_feed_kg,
            feed_conversion_ratio,
            feed_efficiency_pct,
            cost_per_kg_fish,
            fcr_classification,
        })
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PerformanceMetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}
