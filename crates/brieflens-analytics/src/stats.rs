//! Shared descriptive-statistics helpers.
//!
//! Small, allocation-light routines over `&[f64]`. Inputs are assumed
//! finite; `MetricSeries` enforces that at construction. Callers handle
//! the empty case before calling: debug builds assert on an empty slice,
//! release builds return 0.0 rather than faulting.

/// Arithmetic mean. Empty input is a caller bug.
pub fn mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "mean of empty slice");
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance. Empty input is a caller bug.
pub fn population_variance(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "variance of empty slice");
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// A sorted copy of the input (ascending). Finite input means total order.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Percentile of an ascending-sorted slice using the linear interpolation
/// method: rank `(n - 1) * p / 100` interpolated between neighbors.
///
/// `p` is in `[0.0, 100.0]`. Returns 0.0 for an empty slice.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let rank = (n - 1) as f64 * (p / 100.0);
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            let frac = rank - lo as f64;
            sorted[lo] + frac * (sorted[hi.min(n - 1)] - sorted[lo])
        }
    }
}

/// Median via the same interpolation convention as `percentile_sorted`.
/// Empty input is a caller bug.
pub fn median(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "median of empty slice");
    percentile_sorted(&sorted_copy(values), 50.0)
}

/// Minimum of a finite slice. Empty input is a caller bug.
pub fn min(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "min of empty slice");
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Maximum of a finite slice. Empty input is a caller bug.
pub fn max(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "max of empty slice");
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
