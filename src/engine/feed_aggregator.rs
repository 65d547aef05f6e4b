// ==========================================
// 水产养殖绩效指标引擎 - 投喂消耗聚合引擎
// ==========================================
// 职责: 投喂事件的两种独立分组
// 输入: 投喂事件集合 (只读借用)
// 输出: 饲料类型用量聚合 / 按日投喂分布
// 红线: 不修改源集合;相同输入序列的重跑输出逐字节一致
// ==========================================

use crate::domain::feeding::{DailyFeedingPattern, FeedTypeUsage, FeedingEvent};
use crate::engine::error::EngineResult;
use crate::engine::validation::validate_feeding_event;
use std::collections::BTreeMap;

/// 按日分布默认保留的日历日数
pub const DEFAULT_PATTERN_WINDOW_DAYS: usize = 7;

// ==========================================
// FeedConsumptionAggregator - 投喂消耗聚合引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct FeedConsumptionAggregator;

impl FeedConsumptionAggregator {
    /// 创建新的聚合引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 按饲料类型+品牌分组
    // ==========================================

    /// 按 "类型-品牌" 键聚合投喂事件
    ///
    /// 分组键格式 "{feed_type}-{feed_brand}";
    /// average_amount_per_event 在每次累加后重算,调用方可检视中间折叠结果;
    /// 输出顺序为键在输入序列中的首次出现顺序 (总量相同也保持稳定)
    ///
    /// # 参数
    /// - `events`: 投喂事件集合
    ///
    /// # 返回
    /// 饲料类型用量聚合列表;任一事件非法时整体中止
    pub fn group_by_feed_type(&self, events: &[FeedingEvent]) -> EngineResult<Vec<FeedTypeUsage>> {
        // 聚合级计算: 单条非法即中止,部分聚合会误导
        for event in events {
            validate_feeding_event(event)?;
        }

        let mut groups: Vec<FeedTypeUsage> = Vec::new();

        for event in events {
            let key = format!("{}-{}", event.feed_type, event.feed_brand);
            let existing = groups
                .iter_mut()
                .find(|g| format!("{}-{}", g.feed_type, g.feed_brand) == key);

            match existing {
                Some(group) => {
                    group.total_amount_kg += event.amount_kg;
                    group.total_cost += event.feed_cost;
                    group.events_count += 1;
                    // 每次累加后重算,不留到折叠结束
                    group.average_amount_per_event =
                        group.total_amount_kg / group.events_count as f64;
                }
                None => {
                    groups.push(FeedTypeUsage {
                        feed_type: event.feed_type.clone(),
                        feed_brand: event.feed_brand.clone(),
                        total_amount_kg: event.amount_kg,
                        total_cost: event.feed_cost,
                        events_count: 1,
                        average_amount_per_event: event.amount_kg,
                    });
                }
            }
        }

        tracing::debug!(
            events = events.len(),
            groups = groups.len(),
            "按饲料类型聚合完成"
        );

        Ok(groups)
    }

    // ==========================================
    // 按日历日分组
    // ==========================================

    /// 按日历日聚合投喂事件,保留最近的日组
    ///
    /// 只保留排序后最近的 `window_days` 个日历日 (按日期序裁剪,
    /// 与插入顺序无关);输出按日期升序
    ///
    /// # 参数
    /// - `events`: 投喂事件集合
    /// - `window_days`: 保留的日历日数
    ///
    /// # 返回
    /// 按日投喂分布列表;任一事件非法时整体中止
    pub fn group_by_day(
        &self,
        events: &[FeedingEvent],
        window_days: usize,
    ) -> EngineResult<Vec<DailyFeedingPattern>> {
        for event in events {
            validate_feeding_event(event)?;
        }

        // BTreeMap 保证日期升序,裁剪确定性
        let mut days: BTreeMap<chrono::NaiveDate, DailyFeedingPattern> = BTreeMap::new();

        for event in events {
            let entry = days
                .entry(event.feeding_date)
                .or_insert_with(|| DailyFeedingPattern {
                    day: event.feeding_date,
                    total_amount_kg: 0.0,
                    events_count: 0,
                    total_cost: 0.0,
                });
            entry.total_amount_kg += event.amount_kg;
            entry.events_count += 1;
            entry.total_cost += event.feed_cost;
        }

        let mut patterns: Vec<DailyFeedingPattern> = days.into_values().collect();

        // 丢弃较早的日组,保留最近 window_days 天
        if patterns.len() > window_days {
            patterns.drain(..patterns.len() - window_days);
        }

        tracing::debug!(
            events = events.len(),
            days = patterns.len(),
            "按日历日聚合完成"
        );

        Ok(patterns)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for FeedConsumptionAggregator {
    fn default() -> Self {
        Self::new()
    }
}
