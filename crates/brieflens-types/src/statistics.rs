//! Read-only statistics summaries.
//!
//! Fixed-shape records computed once per analyzer call. Never cached across
//! calls; series are small and a single source of truth matters more than
//! micro-optimization.

use serde::{Deserialize, Serialize};

/// Moment-based summary of a series, as used by the z-score detector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Population variance.
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Quartile-based summary of a series, as used by the IQR detector.
///
/// `lower_bound`/`upper_bound` are the outlier fence at the multiplier the
/// detector was configured with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuartileSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}
