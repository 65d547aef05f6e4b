// ==========================================
// 水产养殖绩效指标引擎 - 记录校验
// ==========================================
// 职责: 规范形态记录的快速失败校验,错误指明字段与记录 ID
// 传播策略: 样本级迭代逐记录报告;聚合级计算遇单条非法即整体中止
// ==========================================

use crate::domain::fcr::FcrSeriesPoint;
use crate::domain::feeding::{FeedingEvent, FeedingSummary};
use crate::domain::growth::GrowthSample;
use crate::domain::stock::FeedStockEntry;
use crate::engine::error::{EngineError, EngineResult};

/// 校验必需数值字段: 有限且非负
fn require_non_negative(
    value: f64,
    field: &str,
    record_id: impl std::fmt::Display,
) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::validation(field, record_id, "必须为有限数值"));
    }
    if value < 0.0 {
        return Err(EngineError::validation(field, record_id, "不允许为负"));
    }
    Ok(())
}

/// 校验必需数值字段: 有限且为正
fn require_positive(
    value: f64,
    field: &str,
    record_id: impl std::fmt::Display,
) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::validation(field, record_id, "必须为有限数值"));
    }
    if value <= 0.0 {
        return Err(EngineError::validation(field, record_id, "必须为正数"));
    }
    Ok(())
}

/// 校验投喂事件
pub fn validate_feeding_event(event: &FeedingEvent) -> EngineResult<()> {
    require_non_negative(event.amount_kg, "amount_kg", event.id)?;
    require_non_negative(event.feed_cost, "feed_cost", event.id)?;
    require_non_negative(event.batch_biomass_kg, "batch_biomass_kg", event.id)?;
    Ok(())
}

/// 校验周期投喂汇总
///
/// 不变量: period_start ≤ period_end,
///         total_feed_consumed_kg ≤ total_feed_kg
pub fn validate_feeding_summary(summary: &FeedingSummary) -> EngineResult<()> {
    if summary.period_start > summary.period_end {
        return Err(EngineError::validation(
            "period_start",
            summary.id,
            "周期起始不得晚于周期结束",
        ));
    }
    require_non_negative(summary.total_feed_kg, "total_feed_kg", summary.id)?;
    require_non_negative(
        summary.total_feed_consumed_kg,
        "total_feed_consumed_kg",
        summary.id,
    )?;
    require_non_negative(summary.fcr, "fcr", summary.id)?;
    require_non_negative(summary.total_cost, "total_cost", summary.id)?;
    if summary.feeding_events_count < 0 {
        return Err(EngineError::validation(
            "feeding_events_count",
            summary.id,
            "不允许为负",
        ));
    }
    if summary.total_feed_consumed_kg > summary.total_feed_kg {
        return Err(EngineError::validation(
            "total_feed_consumed_kg",
            summary.id,
            "实际摄食量不得超过投喂总量",
        ));
    }
    Ok(())
}

/// 校验生长采样
///
/// 观测字段缺失不是错误 (被聚合排除);
/// 出现的数值必须为有限正数,否则视为畸形记录
pub fn validate_growth_sample(sample: &GrowthSample) -> EngineResult<()> {
    if sample.sample_size < 1 {
        return Err(EngineError::validation(
            "sample_size",
            sample.id,
            "采样尾数至少为 1",
        ));
    }
    for obs in &sample.observations {
        if let Some(w) = obs.weight_g {
            if !w.is_finite() || w <= 0.0 {
                return Err(EngineError::validation("weight_g", sample.id, "必须为正数"));
            }
        }
        if let Some(l) = obs.length_cm {
            if !l.is_finite() || l <= 0.0 {
                return Err(EngineError::validation("length_cm", sample.id, "必须为正数"));
            }
        }
    }
    Ok(())
}

/// 校验 FCR 序列输入点
pub fn validate_fcr_series_point(point: &FcrSeriesPoint) -> EngineResult<()> {
    let record_id = point.period_start.to_string();
    if point.period_start > point.period_end {
        return Err(EngineError::validation(
            "period_start",
            &record_id,
            "周期起始不得晚于周期结束",
        ));
    }
    if let Some(actual) = point.actual_fcr {
        require_non_negative(actual, "actual_fcr", &record_id)?;
    }
    if let Some(predicted) = point.predicted_fcr {
        require_non_negative(predicted, "predicted_fcr", &record_id)?;
    }
    if point.scenarios_used < 0 {
        return Err(EngineError::validation(
            "scenarios_used",
            &record_id,
            "不允许为负",
        ));
    }
    Ok(())
}

/// 校验饲料入库批次
pub fn validate_stock_entry(entry: &FeedStockEntry) -> EngineResult<()> {
    require_positive(entry.quantity_kg, "quantity_kg", entry.id)?;
    require_non_negative(entry.unit_cost_per_kg, "unit_cost_per_kg", entry.id)?;
    Ok(())
}
