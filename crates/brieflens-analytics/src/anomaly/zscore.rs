//! Parametric outlier detection via z-scores.
//!
//! Flags points whose distance from the series mean, in population
//! standard-deviation units, exceeds the configured threshold. Sensitive to
//! the outliers it is looking for (one extreme point pulls the mean and
//! std); pair with the IQR detector when the series is already contaminated.

use std::sync::Arc;

use brieflens_types::{AnomalyKind, AnomalyRecord, DistributionSummary};

use crate::observer::{default_observer, AnalysisObserver, SkipReason};
use crate::score::{confidence, SeverityScale};
use crate::series::MetricSeries;
use crate::stats;

use super::{DEFAULT_MIN_SAMPLES, DEFAULT_Z_SCORE_THRESHOLD};

const ANALYZER_NAME: &str = "zscore";

/// Configuration for [`ZScoreDetector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZScoreConfig {
    /// Detection threshold in standard-deviation units. A point is flagged
    /// when its z-score strictly exceeds this.
    pub threshold: f64,
    /// Minimum points required before any detection is attempted.
    pub min_samples: usize,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_Z_SCORE_THRESHOLD,
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}

/// Mean / standard-deviation outlier detector.
///
/// Stateless: every call recomputes from the input alone, so two calls with
/// the same series produce identical records.
pub struct ZScoreDetector {
    config: ZScoreConfig,
    observer: Arc<dyn AnalysisObserver>,
}

impl ZScoreDetector {
    /// Create a detector with the given configuration and the default
    /// tracing observer.
    pub fn new(config: ZScoreConfig) -> Self {
        Self {
            config,
            observer: default_observer(),
        }
    }

    /// Create a detector with a custom detection threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self::new(ZScoreConfig {
            threshold,
            ..ZScoreConfig::default()
        })
    }

    /// Replace the reporting observer.
    pub fn with_observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Flag points whose z-score exceeds the threshold.
    ///
    /// Returns an empty list for series shorter than `min_samples`
    /// (insufficient data, not an error) and for zero-variance series
    /// (no meaningful deviation to score). Both skips are reported to the
    /// observer.
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

        let mean = stats::mean(values);
        let std_dev = stats::population_std(values);
        if std_dev < f64::EPSILON {
            self.observer
                .on_skip(ANALYZER_NAME, SkipReason::DegenerateDistribution);
            return Vec::new();
        }

        let mut records = Vec::new();
        for (index, &value) in values.iter().enumerate() {
            let z = (value - mean).abs() / std_dev;
            if z > self.config.threshold {
                let kind = if value > mean {
                    AnomalyKind::Spike
                } else {
                    AnomalyKind::Drop
                };
                records.push(AnomalyRecord {
                    index,
                    value,
                    deviation: z,
                    kind,
                    severity: SeverityScale::Z_SCORE.classify(z),
                    confidence: confidence(n, z, SeverityScale::Z_SCORE.critical),
                });
            }
        }

        self.observer.on_detection(ANALYZER_NAME, n, records.len());
        records
    }

    /// The single-point "expected" value: the series mean. This detector has
    /// no per-index seasonality model, so it is the same for every index.
    pub fn expected_value(&self, series: &MetricSeries) -> Option<f64> {
        if series.is_empty() {
            return None;
        }
        Some(stats::mean(series.values()))
    }

    /// Moment statistics for the series, or `None` when it is empty.
    pub fn statistics(&self, series: &MetricSeries) -> Option<DistributionSummary> {
        let values = series.values();
        if values.is_empty() {
            return None;
        }
        Some(DistributionSummary {
            mean: stats::mean(values),
            median: stats::median(values),
            std_dev: stats::population_std(values),
            variance: stats::population_variance(values),
            min: stats::min(values),
            max: stats::max(values),
            count: values.len(),
        })
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::new(ZScoreConfig::default())
    }
}
