// ==========================================
// 水产养殖绩效指标引擎 - 投喂领域模型
// ==========================================
// 职责: 投喂事件/周期汇总的规范内部形态,及其派生聚合对象
// 红线: 字段回退链在外部采集边界完成,引擎只接受规范形态
// ==========================================

use crate::domain::types::{FcrPerformance, FeedingMethod};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// FeedingEvent - 投喂事件
// ==========================================
// 用途: 外部数据层写入,引擎层只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingEvent {
    // ===== 主键 =====
    pub id: i64, // 事件唯一标识

    // ===== 时间信息 =====
    pub feeding_date: NaiveDate, // 投喂日期
    pub feeding_time: String,    // 投喂时刻 (HH:MM)

    // ===== 投喂量与成本 =====
    pub amount_kg: f64,        // 投喂量 (kg, ≥0)
    pub feed_cost: f64,        // 本次饲料成本 (≥0)
    pub batch_biomass_kg: f64, // 投喂时批次生物量 (kg, ≥0)

    // ===== 饲料信息 =====
    pub feed_type: String,  // 饲料类型
    pub feed_brand: String, // 饲料品牌

    // ===== 位置与操作 =====
    pub container_name: String, // 养殖单元名称
    pub method: FeedingMethod,  // 投喂方式
    pub recorded_by: String,    // 记录人
}

// ==========================================
// FeedingSummary - 周期投喂汇总
// ==========================================
// 外部预聚合记录,引擎只读
// 不变量: total_feed_consumed_kg ≤ total_feed_kg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingSummary {
    pub id: i64,                        // 汇总唯一标识
    pub period_start: NaiveDate,        // 周期起始 (≤ period_end)
    pub period_end: NaiveDate,          // 周期结束
    pub total_feed_kg: f64,             // 周期投喂总量 (kg)
    pub total_feed_consumed_kg: f64,    // 周期实际摄食量 (kg)
    pub total_biomass_gain_kg: f64,     // 周期生物量增长 (kg)
    pub fcr: f64,                       // 周期饲料转化率 (≥0)
    pub average_feeding_percentage: f64, // 平均投喂率 (%)
    pub feeding_events_count: i64,      // 周期投喂事件数 (≥0)
    pub total_cost: f64,                // 周期饲料成本 (≥0)
    pub updated_at: DateTime<Utc>,      // 汇总更新时间
}

// ==========================================
// FeedTypeUsage - 饲料类型用量聚合 (派生)
// ==========================================
// 不变量: average_amount_per_event × events_count == total_amount_kg (浮点容差内)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedTypeUsage {
    pub feed_type: String,             // 饲料类型
    pub feed_brand: String,            // 饲料品牌
    pub total_amount_kg: f64,          // 累计投喂量 (kg)
    pub total_cost: f64,               // 累计成本
    pub events_count: i64,             // 事件数
    pub average_amount_per_event: f64, // 单次平均投喂量 (每次累加后重算)
}

// ==========================================
// DailyFeedingPattern - 按日投喂分布 (派生)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFeedingPattern {
    pub day: NaiveDate,       // 日历日
    pub total_amount_kg: f64, // 当日投喂总量 (kg)
    pub events_count: i64,    // 当日事件数
    pub total_cost: f64,      // 当日成本
}

// ==========================================
// PerformanceMetrics - 绩效汇总指标 (派生)
// ==========================================
// 用途: 绩效引擎输出,供展示层消费
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_feed_consumed_kg: f64,              // 累计投喂量 (kg)
    pub total_feed_cost: f64,                     // 累计饲料成本
    pub events_count: i64,                        // 事件数
    pub days_since_start: i64,                    // 距批次起始天数
    pub average_daily_feed_kg: Option<f64>,       // 日均投喂量 (天数≤0 时为 None)
    pub feed_conversion_ratio: Option<f64>,       // 当前 FCR (无汇总时取调用方回退值)
    pub feed_efficiency_pct: Option<f64>,         // 饲料效率 % = 100/FCR
    pub cost_per_kg_fish: Option<f64>,            // 每公斤鱼成本 (无生物量时为 None)
    pub fcr_classification: Option<FcrPerformance>, // FCR 表现分级
}
