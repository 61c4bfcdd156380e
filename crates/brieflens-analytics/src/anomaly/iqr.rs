//! Non-parametric outlier detection via the interquartile range.
//!
//! Builds a fence from the quartiles (`Q1 - m*IQR .. Q3 + m*IQR`) and flags
//! points outside it. Robust to contamination: one extreme point cannot pull
//! the quartiles the way it pulls a mean and standard deviation.

use std::sync::Arc;

use brieflens_types::{AnomalyKind, AnomalyRecord, QuartileSummary, RangeEstimate};

use crate::observer::{default_observer, AnalysisObserver, SkipReason};
use crate::score::{confidence, SeverityScale};
use crate::series::MetricSeries;
use crate::stats;

use super::{DEFAULT_IQR_MULTIPLIER, DEFAULT_MIN_SAMPLES};

const ANALYZER_NAME: &str = "iqr";

/// Configuration for [`IqrDetector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IqrConfig {
    /// Fence multiplier. 1.5 is the conventional default; 3.0 flags
    /// "extreme" outliers only.
    pub multiplier: f64,
    /// Minimum points required before any detection is attempted.
    pub min_samples: usize,
}

impl Default for IqrConfig {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_IQR_MULTIPLIER,
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}

/// The quartile fence for one series.
struct Fence {
    q1: f64,
    median: f64,
    q3: f64,
    iqr: f64,
    lower: f64,
    upper: f64,
}

/// Quartile-fence outlier detector.
///
/// Stateless; quartiles use the linear interpolation method
/// (`rank = (n - 1) * p`).
pub struct IqrDetector {
    config: IqrConfig,
    observer: Arc<dyn AnalysisObserver>,
}

impl IqrDetector {
    /// Create a detector with the given configuration and the default
    /// tracing observer.
    pub fn new(config: IqrConfig) -> Self {
        Self {
            config,
            observer: default_observer(),
        }
    }

    /// Create a detector with a custom fence multiplier.
    pub fn with_multiplier(multiplier: f64) -> Self {
        Self::new(IqrConfig {
            multiplier,
            ..IqrConfig::default()
        })
    }

    /// Replace the reporting observer.
    pub fn with_observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = observer;
        self
    }

    fn fence(&self, values: &[f64]) -> Fence {
        let sorted = stats::sorted_copy(values);
        let q1 = stats::percentile_sorted(&sorted, 25.0);
        let median = stats::percentile_sorted(&sorted, 50.0);
        let q3 = stats::percentile_sorted(&sorted, 75.0);
        let iqr = q3 - q1;
        Fence {
            q1,
            median,
            q3,
            iqr,
            lower: q1 - self.config.multiplier * iqr,
            upper: q3 + self.config.multiplier * iqr,
        }
    }

    /// Flag points outside the quartile fence.
    ///
    /// Deviation is measured in IQR units past the nearest bound; when the
    /// middle 50% of the data is constant (`IQR == 0`) the deviation is 0
    /// rather than a division fault, and a fully constant series produces no
    /// records at all (the fence collapses onto the constant).
    pub fn detect(&self, series: &MetricSeries) -> Vec<AnomalyRecord> {
        let values = series.values();
        let n = values.len();
        if n < self.config.min_samples {
            self.observer.on_skip(
                ANALYZER_NAME,
                SkipReason::InsufficientData {
                    have: n,
                    need: self.config.min_samples,
                },
            );
            return Vec::new();
        }

        let fence = self.fence(values);
        let mut records = Vec::new();
        for (index, &value) in values.iter().enumerate() {
            let (kind, distance) = if value < fence.lower {
                (AnomalyKind::Drop, fence.lower - value)
            } else if value > fence.upper {
                (AnomalyKind::Spike, value - fence.upper)
            } else {
                continue;
            };
            let deviation = if fence.iqr > 0.0 {
                distance / fence.iqr
            } else {
                0.0
            };
            records.push(AnomalyRecord {
                index,
                value,
                deviation,
                kind,
                severity: SeverityScale::IQR.classify(deviation),
                confidence: confidence(n, deviation, SeverityScale::IQR.critical),
            });
        }

        self.observer.on_detection(ANALYZER_NAME, n, records.len());
        records
    }

    /// The expected-value band at the configured multiplier, for display
    /// ("expected range: X..Y"). `None` below the minimum sample count.
    pub fn expected_range(&self, series: &MetricSeries) -> Option<RangeEstimate> {
        if series.len() < self.config.min_samples {
            return None;
        }
        let fence = self.fence(series.values());
        Some(RangeEstimate {
            lower_bound: fence.lower,
            upper_bound: fence.upper,
        })
    }

    /// Quartile statistics for the series, or `None` when it is empty.
    pub fn statistics(&self, series: &MetricSeries) -> Option<QuartileSummary> {
        let values = series.values();
        if values.is_empty() {
            return None;
        }
        let fence = self.fence(values);
        Some(QuartileSummary {
            q1: fence.q1,
            median: fence.median,
            q3: fence.q3,
            iqr: fence.iqr,
            lower_bound: fence.lower,
            upper_bound: fence.upper,
            min: stats::min(values),
            max: stats::max(values),
            count: values.len(),
        })
    }

    /// Convenience single-value check against a historical comparison
    /// series's fence. `false` when the history is too short to build one
    /// or the value is not finite.
    pub fn is_outlier(&self, value: f64, history: &MetricSeries) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.expected_range(history) {
            Some(range) => !range.contains(value),
            None => false,
        }
    }
}

impl Default for IqrDetector {
    fn default() -> Self {
        Self::new(IqrConfig::default())
    }
}
