// ==========================================
// 水产养殖绩效指标引擎 - 饲料库存 FIFO 台账
// ==========================================
// 职责: 单容器库存批次的 FIFO 排序、消耗模拟与估值
// 输入: 饲料入库批次
// 输出: 消耗模拟报告 / 剩余估值 / FIFO 违规警告
// 红线: 乱序入库是警告不是错误,批次仍按日期序接纳,不回滚状态;
//       估值逐批保留入库单价,不做加权平均成本
// ==========================================

use crate::domain::stock::{
    ConsumptionReport, FeedStockEntry, FifoViolationWarning, LotDraw, StockLot,
};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::validation::validate_stock_entry;
use serde_json::json;

// ==========================================
// FeedStockLedger - 饲料库存 FIFO 台账
// ==========================================
// 单容器状态机: 批次按 entry_date 升序,同日按插入先后
#[derive(Debug, Clone)]
pub struct FeedStockLedger {
    container_id: i64,
    lots: Vec<StockLot>,
    consumed_total_kg: f64,
}

impl FeedStockLedger {
    /// 创建空台账
    ///
    /// # 参数
    /// - `container_id`: 饲料容器 ID
    pub fn new(container_id: i64) -> Self {
        Self {
            container_id,
            lots: Vec::new(),
            consumed_total_kg: 0.0,
        }
    }

    /// 从批次集合构建台账
    ///
    /// 逐条按 insert 语义接纳,返回台账与全部 FIFO 违规警告
    pub fn with_entries(
        container_id: i64,
        entries: &[FeedStockEntry],
    ) -> EngineResult<(Self, Vec<FifoViolationWarning>)> {
        let mut ledger = Self::new(container_id);
        let mut warnings = Vec::new();
        for entry in entries {
            if let Some(warning) = ledger.insert(entry.clone())? {
                warnings.push(warning);
            }
        }
        Ok((ledger, warnings))
    }

    // ==========================================
    // 入库
    // ==========================================

    /// 接纳入库批次
    ///
    /// 入库日期早于当前 FIFO 队首 (最早仍有剩余的批次) 时产生
    /// FifoViolationWarning - 非致命,批次仍按日期序插入;
    /// 警告记录产生时是否已发生消耗
    ///
    /// # 参数
    /// - `entry`: 入库批次
    ///
    /// # 返回
    /// 可能的 FIFO 违规警告;批次本身非法时报校验错误
    pub fn insert(&mut self, entry: FeedStockEntry) -> EngineResult<Option<FifoViolationWarning>> {
        validate_stock_entry(&entry)?;
        if entry.container_id != self.container_id {
            return Err(EngineError::validation(
                "container_id",
                entry.id,
                format!("批次不属于容器 {}", self.container_id),
            ));
        }

        let warning = match self.head_lot() {
            Some(head) if entry.entry_date < head.entry.entry_date => {
                let consumption_started = self.consumed_total_kg > 0.0;
                let detail = json!({
                    "entry_id": entry.id,
                    "entry_date": entry.entry_date.to_string(),
                    "head_entry_id": head.entry.id,
                    "head_entry_date": head.entry.entry_date.to_string(),
                    "consumption_started": consumption_started,
                })
                .to_string();

                tracing::warn!(
                    container_id = self.container_id,
                    entry_id = entry.id,
                    "入库日期早于 FIFO 队首,乱序入库"
                );

                Some(FifoViolationWarning {
                    container_id: self.container_id,
                    entry_id: entry.id,
                    entry_date: entry.entry_date,
                    head_entry_id: head.entry.id,
                    head_entry_date: head.entry.entry_date,
                    consumption_started,
                    detail,
                })
            }
            _ => None,
        };

        // 按日期序插入: 落在所有 entry_date ≤ 新批次的批次之后 (同日保持插入先后)
        let position = self
            .lots
            .iter()
            .position(|lot| lot.entry.entry_date > entry.entry_date)
            .unwrap_or(self.lots.len());
        let remaining_kg = entry.quantity_kg;
        self.lots.insert(
            position,
            StockLot {
                entry,
                remaining_kg,
            },
        );

        Ok(warning)
    }

    // ==========================================
    // 消耗
    // ==========================================

    /// 消耗模拟: 不改变台账状态
    ///
    /// 从最早批次起提取,提完推进到下一批;
    /// 提取量超出总库存时消耗全部可用量并报告缺口,不报错
    ///
    /// # 参数
    /// - `amount_kg`: 请求提取量 (kg, ≥0)
    pub fn simulate_consumption(&self, amount_kg: f64) -> EngineResult<ConsumptionReport> {
        if !amount_kg.is_finite() || amount_kg < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "提取量必须为非负有限数: {}",
                amount_kg
            )));
        }

        let mut remaining_request = amount_kg;
        let mut consumed_kg = 0.0;
        let mut total_cost = 0.0;
        let mut draws = Vec::new();

        for lot in &self.lots {
            if remaining_request <= 0.0 {
                break;
            }
            if lot.remaining_kg <= 0.0 {
                continue;
            }

            let drawn = lot.remaining_kg.min(remaining_request);
            let cost = drawn * lot.entry.unit_cost_per_kg;

            draws.push(LotDraw {
                entry_id: lot.entry.id,
                entry_date: lot.entry.entry_date,
                drawn_kg: drawn,
                remaining_after_kg: lot.remaining_kg - drawn,
                unit_cost_per_kg: lot.entry.unit_cost_per_kg,
                cost,
            });

            consumed_kg += drawn;
            total_cost += cost;
            remaining_request -= drawn;
        }

        Ok(ConsumptionReport {
            container_id: self.container_id,
            requested_kg: amount_kg,
            consumed_kg,
            shortfall_kg: amount_kg - consumed_kg,
            total_cost,
            lots: draws,
        })
    }

    /// 消耗: 按 FIFO 序提取并更新批次剩余
    ///
    /// 与 simulate_consumption 同一套算术,区别仅在于落账
    pub fn consume(&mut self, amount_kg: f64) -> EngineResult<ConsumptionReport> {
        let report = self.simulate_consumption(amount_kg)?;

        for draw in &report.lots {
            if let Some(lot) = self.lots.iter_mut().find(|l| l.entry.id == draw.entry_id) {
                lot.remaining_kg = draw.remaining_after_kg;
            }
        }
        self.consumed_total_kg += report.consumed_kg;

        tracing::debug!(
            container_id = self.container_id,
            requested_kg = report.requested_kg,
            consumed_kg = report.consumed_kg,
            shortfall_kg = report.shortfall_kg,
            "FIFO 消耗落账"
        );

        Ok(report)
    }

    // ==========================================
    // 估值与查询
    // ==========================================

    /// 容器 ID
    pub fn container_id(&self) -> i64 {
        self.container_id
    }

    /// FIFO 序批次视图 (含已提完批次)
    pub fn lots(&self) -> &[StockLot] {
        &self.lots
    }

    /// 当前 FIFO 队首: 最早仍有剩余的批次
    pub fn head_lot(&self) -> Option<&StockLot> {
        self.lots.iter().find(|lot| lot.remaining_kg > 0.0)
    }

    /// 剩余总量 (kg)
    pub fn total_remaining_kg(&self) -> f64 {
        self.lots.iter().map(|lot| lot.remaining_kg).sum()
    }

    /// 剩余总价值 = Σ 批次剩余量 × 本批次入库单价
    pub fn total_value(&self) -> f64 {
        self.lots.iter().map(|lot| lot.remaining_value()).sum()
    }

    /// 累计已消耗量 (kg)
    pub fn consumed_total_kg(&self) -> f64 {
        self.consumed_total_kg
    }
}

/// 跨容器库存总价值
pub fn total_inventory_value(ledgers: &[FeedStockLedger]) -> f64 {
    ledgers.iter().map(|ledger| ledger.total_value()).sum()
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const EPS: f64 = 1e-9;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// 创建测试用入库批次
    fn create_test_entry(
        id: i64,
        container_id: i64,
        quantity_kg: f64,
        entry_date: NaiveDate,
        unit_cost_per_kg: f64,
    ) -> FeedStockEntry {
        FeedStockEntry {
            id,
            container_id,
            quantity_kg,
            entry_date,
            unit_cost_per_kg,
        }
    }

    #[test]
    fn test_fifo_ordering_with_out_of_order_insertion() {
        let mut ledger = FeedStockLedger::new(1);
        let d1 = make_date(2025, 3, 1);
        let d2 = make_date(2025, 3, 5);
        let d3 = make_date(2025, 3, 10);

        // 插入顺序 [d3, d1, d2],日期序 d1 < d2 < d3
        ledger
            .insert(create_test_entry(3, 1, 300.0, d3, 2.0))
            .unwrap();
        ledger
            .insert(create_test_entry(1, 1, 100.0, d1, 2.5))
            .unwrap();
        ledger
            .insert(create_test_entry(2, 1, 200.0, d2, 2.2))
            .unwrap();

        // 消耗恰好 d1 的数量: d1 提完,d2/d3 不动
        let report = ledger.consume(100.0).unwrap();

        assert!((report.consumed_kg - 100.0).abs() < EPS);
        assert!((report.shortfall_kg - 0.0).abs() < EPS);
        assert_eq!(report.lots.len(), 1);
        assert_eq!(report.lots[0].entry_id, 1);

        let lots = ledger.lots();
        assert_eq!(lots[0].entry.id, 1);
        assert!((lots[0].remaining_kg - 0.0).abs() < EPS);
        assert_eq!(lots[1].entry.id, 2);
        assert!((lots[1].remaining_kg - 200.0).abs() < EPS);
        assert_eq!(lots[2].entry.id, 3);
        assert!((lots[2].remaining_kg - 300.0).abs() < EPS);
    }

    #[test]
    fn test_same_date_ties_keep_insertion_order() {
        let mut ledger = FeedStockLedger::new(1);
        let d = make_date(2025, 3, 1);

        ledger.insert(create_test_entry(10, 1, 50.0, d, 2.0)).unwrap();
        ledger.insert(create_test_entry(11, 1, 50.0, d, 3.0)).unwrap();

        // 同日批次保持插入先后,先入先出
        let report = ledger.consume(60.0).unwrap();
        assert_eq!(report.lots[0].entry_id, 10);
        assert!((report.lots[0].drawn_kg - 50.0).abs() < EPS);
        assert_eq!(report.lots[1].entry_id, 11);
        assert!((report.lots[1].drawn_kg - 10.0).abs() < EPS);
    }

    #[test]
    fn test_insert_earlier_than_head_warns_but_accepts() {
        let mut ledger = FeedStockLedger::new(1);
        let d1 = make_date(2025, 3, 1);
        let d3 = make_date(2025, 3, 10);

        let first = ledger.insert(create_test_entry(3, 1, 300.0, d3, 2.0)).unwrap();
        assert!(first.is_none());

        // 早于队首 → 警告,但仍接纳并排到队首
        let warning = ledger
            .insert(create_test_entry(1, 1, 100.0, d1, 2.5))
            .unwrap()
            .expect("应产生 FIFO 违规警告");

        assert_eq!(warning.entry_id, 1);
        assert_eq!(warning.head_entry_id, 3);
        assert!(!warning.consumption_started);
        assert_eq!(ledger.lots()[0].entry.id, 1);
    }

    #[test]
    fn test_insert_after_consumption_flags_warning() {
        let mut ledger = FeedStockLedger::new(1);
        ledger
            .insert(create_test_entry(2, 1, 200.0, make_date(2025, 3, 5), 2.2))
            .unwrap();
        ledger.consume(50.0).unwrap();

        // 已开始消耗后乱序入库,警告携带 consumption_started
        let warning = ledger
            .insert(create_test_entry(1, 1, 100.0, make_date(2025, 3, 1), 2.5))
            .unwrap()
            .expect("应产生 FIFO 违规警告");

        assert!(warning.consumption_started);
        assert!(warning.detail.contains("consumption_started"));
    }

    #[test]
    fn test_consume_more_than_stock_reports_shortfall() {
        let mut ledger = FeedStockLedger::new(1);
        ledger
            .insert(create_test_entry(1, 1, 80.0, make_date(2025, 3, 1), 2.0))
            .unwrap();

        let report = ledger.consume(100.0).unwrap();

        // 消耗全部可用量并报告缺口,不报错
        assert!((report.consumed_kg - 80.0).abs() < EPS);
        assert!((report.shortfall_kg - 20.0).abs() < EPS);
        assert!((ledger.total_remaining_kg() - 0.0).abs() < EPS);
    }

    #[test]
    fn test_simulate_does_not_mutate_state() {
        let mut ledger = FeedStockLedger::new(1);
        ledger
            .insert(create_test_entry(1, 1, 100.0, make_date(2025, 3, 1), 2.0))
            .unwrap();

        let report = ledger.simulate_consumption(60.0).unwrap();
        assert!((report.consumed_kg - 60.0).abs() < EPS);

        // 模拟不落账
        assert!((ledger.total_remaining_kg() - 100.0).abs() < EPS);
        assert!((ledger.consumed_total_kg() - 0.0).abs() < EPS);
    }

    #[test]
    fn test_valuation_preserves_per_lot_cost() {
        let mut ledger = FeedStockLedger::new(1);
        ledger
            .insert(create_test_entry(1, 1, 100.0, make_date(2025, 3, 1), 2.0))
            .unwrap();
        ledger
            .insert(create_test_entry(2, 1, 50.0, make_date(2025, 3, 5), 4.0))
            .unwrap();

        // 初始估值: 100×2.0 + 50×4.0 = 400
        assert!((ledger.total_value() - 400.0).abs() < EPS);

        // 提取 120kg: 100 来自批次1 (2.0/kg),20 来自批次2 (4.0/kg)
        let report = ledger.consume(120.0).unwrap();
        assert!((report.total_cost - (100.0 * 2.0 + 20.0 * 4.0)).abs() < EPS);

        // 剩余 30kg 按批次2 自身单价估值,不做加权平均
        assert!((ledger.total_value() - 30.0 * 4.0).abs() < EPS);
    }

    #[test]
    fn test_insert_rejects_wrong_container() {
        let mut ledger = FeedStockLedger::new(1);
        let result = ledger.insert(create_test_entry(1, 2, 100.0, make_date(2025, 3, 1), 2.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_consume_rejects_negative_amount() {
        let mut ledger = FeedStockLedger::new(1);
        assert!(ledger.consume(-5.0).is_err());
        assert!(ledger.simulate_consumption(f64::NAN).is_err());
    }

    #[test]
    fn test_with_entries_collects_warnings() {
        let entries = vec![
            create_test_entry(3, 1, 300.0, make_date(2025, 3, 10), 2.0),
            create_test_entry(1, 1, 100.0, make_date(2025, 3, 1), 2.5),
            create_test_entry(2, 1, 200.0, make_date(2025, 3, 5), 2.2),
        ];

        let (ledger, warnings) = FeedStockLedger::with_entries(1, &entries).unwrap();

        // 批次1 早于队首 (批次3) → 1 条警告;批次2 晚于新队首 (批次1) → 无警告
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].entry_id, 1);
        assert_eq!(ledger.lots().len(), 3);
        assert!((ledger.total_remaining_kg() - 600.0).abs() < EPS);
    }

    #[test]
    fn test_total_inventory_value_across_containers() {
        let mut a = FeedStockLedger::new(1);
        a.insert(create_test_entry(1, 1, 100.0, make_date(2025, 3, 1), 2.0))
            .unwrap();
        let mut b = FeedStockLedger::new(2);
        b.insert(create_test_entry(2, 2, 50.0, make_date(2025, 3, 2), 3.0))
            .unwrap();

        assert!((total_inventory_value(&[a, b]) - 350.0).abs() < EPS);
    }
}
