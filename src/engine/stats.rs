// ==========================================
// 水产养殖绩效指标引擎 - 统计原语
// ==========================================
// 职责: 均值/总体标准差/极值/安全除法
// 红线: 本模块任何函数不返回 NaN 或 Infinity,
//       退化输入一律归 None,由调用方渲染为 "N/A"
// ==========================================

/// 算术均值
///
/// # 返回
/// 空输入返回 None (不产生 NaN)
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    let sum: f64 = xs.iter().sum();
    let m = sum / xs.len() as f64;
    if m.is_finite() {
        Some(m)
    } else {
        None
    }
}

/// 总体标准差 (除以 N,非 N-1)
///
/// # 返回
/// 空输入返回 None;单元素输入返回 Some(0.0)
pub fn std_dev(xs: &[f64]) -> Option<f64> {
    let m = mean(xs)?;
    let variance = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
    let sd = variance.sqrt();
    if sd.is_finite() {
        Some(sd)
    } else {
        None
    }
}

/// 最小值
pub fn min(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    let mut result = f64::INFINITY;
    for x in xs {
        if *x < result {
            result = *x;
        }
    }
    if result.is_finite() {
        Some(result)
    } else {
        None
    }
}

/// 最大值
pub fn max(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    let mut result = f64::NEG_INFINITY;
    for x in xs {
        if *x > result {
            result = *x;
        }
    }
    if result.is_finite() {
        Some(result)
    } else {
        None
    }
}

/// 比率安全除法
///
/// # 返回
/// 分母为 0 或商非有限时返回 None (不产生 Infinity/NaN)
pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let q = numerator / denominator;
    if q.is_finite() {
        Some(q)
    } else {
        None
    }
}
