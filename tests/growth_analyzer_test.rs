// ==========================================
// 生长采样分析引擎集成测试
// ==========================================
// 职责: 验证样本统计、逐尾肥满度口径与序列趋势的端到端行为
// ==========================================

use aqua_metrics::domain::growth::{FishObservation, GrowthSample};
use aqua_metrics::engine::GrowthSampleAnalyzer;
use chrono::NaiveDate;

const EPS: f64 = 1e-9;

// ==========================================
// 测试辅助函数
// ==========================================

fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 创建测试用个体观测
fn create_test_observation(id: &str, weight_g: f64, length_cm: f64) -> FishObservation {
    FishObservation {
        fish_identifier: id.to_string(),
        weight_g: Some(weight_g),
        length_cm: Some(length_cm),
    }
}

/// 创建测试用生长采样
fn create_test_sample(id: i64, date: NaiveDate, observations: Vec<FishObservation>) -> GrowthSample {
    GrowthSample {
        id,
        sample_date: date,
        sample_size: observations.len().max(1) as i64,
        observations,
    }
}

// ==========================================
// 十尾采样的完整统计
// ==========================================

#[test]
fn test_ten_fish_sample_statistics() {
    let analyzer = GrowthSampleAnalyzer::new();

    let weights = [245.0, 252.0, 248.0, 260.0, 255.0, 243.0, 259.0, 251.0, 247.0, 250.0];
    let lengths = [14.8, 15.1, 14.9, 15.4, 15.2, 14.7, 15.3, 15.0, 14.9, 15.0];

    let observations: Vec<FishObservation> = weights
        .iter()
        .zip(lengths.iter())
        .enumerate()
        .map(|(i, (w, l))| create_test_observation(&format!("{}", i + 1), *w, *l))
        .collect();

    let sample = create_test_sample(1, make_date(2025, 3, 10), observations);
    let result = analyzer.analyze(&sample).unwrap();

    assert_eq!(result.measured_count, 10);

    // 均值与极值人工核对
    let expected_avg: f64 = weights.iter().sum::<f64>() / 10.0;
    assert!((result.avg_weight_g.unwrap() - expected_avg).abs() < EPS);
    assert_eq!(result.min_weight, Some(243.0));
    assert_eq!(result.max_weight, Some(260.0));
    assert_eq!(result.min_length, Some(14.7));
    assert_eq!(result.max_length, Some(15.4));

    // 总体标准差 (除以 N)
    let variance: f64 = weights
        .iter()
        .map(|w| (w - expected_avg) * (w - expected_avg))
        .sum::<f64>()
        / 10.0;
    assert!((result.std_dev_weight.unwrap() - variance.sqrt()).abs() < EPS);

    // 平均 K = 逐尾 K 的均值
    let expected_k: f64 = weights
        .iter()
        .zip(lengths.iter())
        .map(|(w, l)| w / (l * l * l) * 100.0)
        .sum::<f64>()
        / 10.0;
    assert!((result.avg_condition_factor.unwrap() - expected_k).abs() < EPS);
}

// ==========================================
// 采样序列 → 生长趋势
// ==========================================

#[test]
fn test_sample_series_growth_trend() {
    let analyzer = GrowthSampleAnalyzer::new();

    // 三次采样,每次间隔 7 天,平均体重 200 → 210 → 218
    let samples = vec![
        create_test_sample(
            1,
            make_date(2025, 3, 1),
            vec![
                create_test_observation("1", 195.0, 13.9),
                create_test_observation("2", 205.0, 14.1),
            ],
        ),
        create_test_sample(
            2,
            make_date(2025, 3, 8),
            vec![
                create_test_observation("1", 205.0, 14.2),
                create_test_observation("2", 215.0, 14.4),
            ],
        ),
        create_test_sample(
            3,
            make_date(2025, 3, 15),
            vec![
                create_test_observation("1", 214.0, 14.5),
                create_test_observation("2", 222.0, 14.7),
            ],
        ),
    ];

    let points = analyzer.analyze_series(&samples).unwrap();

    assert_eq!(points.len(), 3);
    assert!((points[0].growth_rate_pct - 0.0).abs() < EPS);
    // (10/200) × (7/7) × 100 = 5%
    assert!((points[1].growth_rate_pct - 5.0).abs() < EPS);
    // (8/210) × (7/7) × 100 ≈ 3.8095%
    assert!((points[2].growth_rate_pct - 8.0 / 210.0 * 100.0).abs() < EPS);

    // 趋势变化量 = 末点 - 前一点
    let trend = analyzer.growth_trend(&points);
    assert!((trend - (8.0 / 210.0 * 100.0 - 5.0)).abs() < EPS);
    assert!(trend < 0.0); // 增速放缓
}

// ==========================================
// 畸形样本的序列级中止
// ==========================================

#[test]
fn test_series_aborts_on_malformed_sample() {
    let analyzer = GrowthSampleAnalyzer::new();

    let good = create_test_sample(
        1,
        make_date(2025, 3, 1),
        vec![create_test_observation("1", 200.0, 14.0)],
    );
    let mut bad = create_test_sample(
        2,
        make_date(2025, 3, 8),
        vec![create_test_observation("1", 210.0, 14.2)],
    );
    bad.observations[0].weight_g = Some(f64::NAN);

    // 聚合级计算: 单条非法即整体中止
    assert!(analyzer.analyze_series(&[good.clone(), bad.clone()]).is_err());

    // 样本级迭代: 兄弟样本不受影响
    let results = analyzer.analyze_all(&[good, bad]);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}
