// ==========================================
// 水产养殖绩效指标引擎 - 生长采样分析引擎
// ==========================================
// 职责: 个体鱼观测的样本统计与肥满度,采样序列的生长趋势
// 输入: 生长采样 (含个体观测)
// 输出: 样本统计快照 / 生长趋势序列
// 红线: 平均肥满度是逐尾 K 的均值,不是均值体重/体长算出的 K,
//       偏态分布下两者不同,必须保持逐尾口径
// ==========================================

use crate::domain::growth::{GrowthSample, GrowthSampleStats, GrowthTrendPoint};
use crate::engine::error::EngineResult;
use crate::engine::stats;
use crate::engine::validation::validate_growth_sample;

// ==========================================
// GrowthSampleAnalyzer - 生长采样分析引擎
// ==========================================
// 无状态引擎,所有方法都是纯函数
pub struct GrowthSampleAnalyzer;

impl GrowthSampleAnalyzer {
    /// 创建新的分析引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 单样本统计
    // ==========================================

    /// 计算单个样本的统计快照
    ///
    /// 缺失体重或体长的观测被所有聚合排除,但不使样本失效;
    /// 零有效观测的样本产出全 None 快照,不报错
    ///
    /// # 参数
    /// - `sample`: 生长采样
    ///
    /// # 返回
    /// 样本统计快照;样本畸形 (采样尾数<1 / 出现非正测量值) 时报错
    pub fn analyze(&self, sample: &GrowthSample) -> EngineResult<GrowthSampleStats> {
        validate_growth_sample(sample)?;

        let mut weights = Vec::new();
        let mut lengths = Vec::new();
        let mut k_factors = Vec::new();

        for obs in &sample.observations {
            if !obs.is_measurable() {
                continue;
            }
            // is_measurable 保证两个字段均存在
            if let (Some(w), Some(l)) = (obs.weight_g, obs.length_cm) {
                weights.push(w);
                lengths.push(l);
            }
            if let Some(k) = obs.condition_factor() {
                k_factors.push(k);
            }
        }

        Ok(GrowthSampleStats {
            sample_id: sample.id,
            sample_date: sample.sample_date,
            measured_count: weights.len() as i64,
            avg_weight_g: stats::mean(&weights),
            avg_length_cm: stats::mean(&lengths),
            std_dev_weight: stats::std_dev(&weights),
            std_dev_length: stats::std_dev(&lengths),
            min_weight: stats::min(&weights),
            max_weight: stats::max(&weights),
            min_length: stats::min(&lengths),
            max_length: stats::max(&lengths),
            avg_condition_factor: stats::mean(&k_factors),
        })
    }

    /// 逐样本计算统计快照
    ///
    /// 样本级传播: 单个畸形样本不中止兄弟样本的处理
    pub fn analyze_all(&self, samples: &[GrowthSample]) -> Vec<EngineResult<GrowthSampleStats>> {
        samples.iter().map(|s| self.analyze(s)).collect()
    }

    // ==========================================
    // 序列趋势分析
    // ==========================================

    /// 按采样日期升序计算生长趋势序列
    ///
    /// 周生长率 = ((w - w_prev) / w_prev) × (7 / 间隔天数) × 100,
    /// 首点或前值无效时为 0
    ///
    /// # 参数
    /// - `samples`: 生长采样集合 (顺序不限,内部按日期排序)
    ///
    /// # 返回
    /// 生长趋势序列;聚合级计算,任一样本畸形时整体中止
    pub fn analyze_series(&self, samples: &[GrowthSample]) -> EngineResult<Vec<GrowthTrendPoint>> {
        let mut stats_points = Vec::with_capacity(samples.len());
        for sample in samples {
            stats_points.push(self.analyze(sample)?);
        }
        stats_points.sort_by(|a, b| {
            a.sample_date
                .cmp(&b.sample_date)
                .then(a.sample_id.cmp(&b.sample_id))
        });

        let mut points = Vec::with_capacity(stats_points.len());
        for (index, current) in stats_points.iter().enumerate() {
            let mut growth_rate_pct = 0.0;

            if index > 0 {
                let prev = &stats_points[index - 1];
                let days_diff = (current.sample_date - prev.sample_date).num_days();
                if days_diff > 0 {
                    if let (Some(w), Some(w_prev)) = (current.avg_weight_g, prev.avg_weight_g) {
                        if w_prev > 0.0 {
                            growth_rate_pct =
                                (w - w_prev) / w_prev * (7.0 / days_diff as f64) * 100.0;
                        }
                    }
                }
            }

            points.push(GrowthTrendPoint {
                sample_date: current.sample_date,
                avg_weight_g: current.avg_weight_g,
                growth_rate_pct,
                condition_factor: current.avg_condition_factor,
            });
        }

        tracing::debug!(samples = samples.len(), points = points.len(), "生长趋势序列计算完成");

        Ok(points)
    }

    /// 生长趋势变化量 = 末点生长率 - 前一点生长率
    ///
    /// 少于 2 个点时为 0
    pub fn growth_trend(&self, points: &[GrowthTrendPoint]) -> f64 {
        if points.len() < 2 {
            return 0.0;
        }
        points[points.len() - 1].growth_rate_pct - points[points.len() - 2].growth_rate_pct
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for GrowthSampleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
