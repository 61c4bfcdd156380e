//! Directional trend classification over an analysis window.
//!
//! Fits an ordinary-least-squares line against the point index and
//! classifies the normalized slope as up, down, or flat. Point anomalies are
//! a separate concern; run the detectors in [`crate::anomaly`] for those.

use std::sync::Arc;

use brieflens_types::{TrendDirection, TrendRecord};

use crate::observer::{default_observer, AnalysisObserver, SkipReason};
use crate::series::MetricSeries;
use crate::stats;

const ANALYZER_NAME: &str = "trend";

/// Default minimum sample count before a trend is classified.
pub const DEFAULT_TREND_MIN_SAMPLES: usize = 10;

/// Default flat-band threshold for the normalized slope
/// (fraction of the series scale per step).
pub const DEFAULT_FLAT_THRESHOLD: f64 = 0.01;

/// Sample count at which the confidence size factor saturates.
const FULL_CONFIDENCE_SAMPLES: f64 = 30.0;

/// Configuration for [`TrendAnalyzer`].
///
/// The flat threshold is a policy choice, not a hidden constant: the slope
/// is normalized by the series scale so the threshold reads as
/// "fractional change per step" and is unit-independent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendConfig {
    /// Minimum points required before a direction is classified.
    pub min_samples: usize,
    /// Normalized-slope band classified as flat: `Up` above it, `Down`
    /// below its negation.
    pub flat_threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_TREND_MIN_SAMPLES,
            flat_threshold: DEFAULT_FLAT_THRESHOLD,
        }
    }
}

/// Least-squares trend classifier.
///
/// Stateless; tolerates short windows and zero-variance input by returning
/// the neutral flat record.
pub struct TrendAnalyzer {
    config: TrendConfig,
    observer: Arc<dyn AnalysisObserver>,
}

impl TrendAnalyzer {
    /// Create an analyzer with the given configuration and the default
    /// tracing observer.
    pub fn new(config: TrendConfig) -> Self {
        Self {
            config,
            observer: default_observer(),
        }
    }

    /// Replace the reporting observer.
    pub fn with_observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Classify the directional movement of the series.
    ///
    /// Short windows and zero-variance series return
    /// [`TrendRecord::flat()`] after notifying the observer. The slope is
    /// fit against the point index; magnitude is the slope divided by the
    /// mean magnitude (or the value range when the mean is near zero), and
    /// confidence scales the R² of the fit by a sample-size factor, clamped
    /// to `[0, 1]`.
    pub fn analyze(&self, series: &MetricSeries) -> TrendRecord {
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
            return TrendRecord::flat();
        }

        let mean_y = stats::mean(values);
        let mean_x = (n - 1) as f64 / 2.0;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        let mut syy = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        if syy < f64::EPSILON {
            // Perfectly constant window: nothing to classify.
            self.observer
                .on_skip(ANALYZER_NAME, SkipReason::DegenerateDistribution);
            return TrendRecord::flat();
        }

        let slope = sxy / sxx;
        let r_squared = (sxy * sxy) / (sxx * syy);

        // Normalize so the threshold is unit-independent. A series hovering
        // around zero falls back to its range as the scale.
        let scale = if mean_y.abs() > 1e-12 {
            mean_y.abs()
        } else {
            stats::max(values) - stats::min(values)
        };
        let magnitude = slope / scale;

        let direction = if magnitude > self.config.flat_threshold {
            TrendDirection::Up
        } else if magnitude < -self.config.flat_threshold {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        let size_factor = (n as f64 / FULL_CONFIDENCE_SAMPLES).min(1.0);
        let confidence = (r_squared * size_factor).clamp(0.0, 1.0);

        TrendRecord {
            direction,
            magnitude,
            confidence,
        }
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new(TrendConfig::default())
    }
}
