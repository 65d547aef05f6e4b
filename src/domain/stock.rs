// ==========================================
// 水产养殖绩效指标引擎 - 饲料库存领域模型
// ==========================================
// 职责: FIFO 库存批次 (lot) 的规范形态与消耗模拟报告
// 红线: 逐批保留入库单价,估值按 FIFO 数量序,不做加权平均成本
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// FeedStockEntry - 饲料入库批次
// ==========================================
// 归属: 恰好一个饲料容器
// FIFO 序: entry_date 升序,同日按插入先后
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedStockEntry {
    pub id: i64,                 // 批次唯一标识
    pub container_id: i64,       // 所属饲料容器
    pub quantity_kg: f64,        // 入库数量 (kg, >0)
    pub entry_date: NaiveDate,   // 入库日期
    pub unit_cost_per_kg: f64,   // 入库单价 (≥0)
}

// ==========================================
// StockLot - 台账批次状态
// ==========================================
// 台账内部状态: 原始批次 + 剩余数量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLot {
    pub entry: FeedStockEntry, // 原始入库批次 (单价保留)
    pub remaining_kg: f64,     // 剩余数量 (kg)
}

impl StockLot {
    /// 批次剩余价值 = 剩余数量 × 本批次入库单价
    pub fn remaining_value(&self) -> f64 {
        self.remaining_kg * self.entry.unit_cost_per_kg
    }
}

// ==========================================
// LotDraw - 单批次提取明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotDraw {
    pub entry_id: i64,            // 批次 ID
    pub entry_date: NaiveDate,    // 批次入库日期
    pub drawn_kg: f64,            // 本批次提取量 (kg)
    pub remaining_after_kg: f64,  // 提取后剩余 (kg)
    pub unit_cost_per_kg: f64,    // 批次单价
    pub cost: f64,                // 提取成本 = drawn_kg × 单价
}

// ==========================================
// ConsumptionReport - 消耗模拟报告
// ==========================================
// 提取量超出总库存时消耗全部可用量并报告缺口,不报错
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionReport {
    pub container_id: i64,    // 容器 ID
    pub requested_kg: f64,    // 请求提取量 (kg)
    pub consumed_kg: f64,     // 实际提取量 (kg)
    pub shortfall_kg: f64,    // 缺口 = requested - consumed
    pub total_cost: f64,      // 提取总成本 (逐批单价累计)
    pub lots: Vec<LotDraw>,   // 按 FIFO 序的逐批提取明细
}

// ==========================================
// FifoViolationWarning - FIFO 违规警告
// ==========================================
// 非致命信号: 入库日期早于当前 FIFO 队首时产生,批次仍按日期序接纳
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FifoViolationWarning {
    pub container_id: i64,           // 容器 ID
    pub entry_id: i64,               // 违规批次 ID
    pub entry_date: NaiveDate,       // 违规批次入库日期
    pub head_entry_id: i64,          // 当时队首批次 ID
    pub head_entry_date: NaiveDate,  // 当时队首入库日期
    pub consumption_started: bool,   // 警告产生时是否已发生消耗
    pub detail: String,              // 可解释原因 (JSON)
}
