//! Point-anomaly detectors.
//!
//! Two stateless detectors over the same input shape, typically run together
//! by the monitoring job and merged by the caller:
//!
//! ```text
//!   MetricSeries ──┬──► ZScoreDetector (mean / population std)
//!                  └──► IQRDetector    (quartile fence)
//!                        │
//!                        ▼
//!                  Vec<AnomalyRecord> (index, deviation, kind,
//!                                      severity, confidence)
//! ```
//!
//! Both degrade silently on short or constant input (inside a batch job one
//! metric's bad data must not abort the batch) and report those skips
//! through the injected [`AnalysisObserver`](crate::observer::AnalysisObserver).

pub mod iqr;
pub mod zscore;

pub use iqr::{IqrConfig, IqrDetector};
pub use zscore::{ZScoreConfig, ZScoreDetector};

/// Default z-score detection threshold (standard-deviation units).
pub const DEFAULT_Z_SCORE_THRESHOLD: f64 = 3.0;

/// Default IQR fence multiplier.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// IQR fence multiplier that flags "extreme" outliers only.
pub const EXTREME_IQR_MULTIPLIER: f64 = 3.0;

/// Default minimum sample count for both detectors.
pub const DEFAULT_MIN_SAMPLES: usize = 10;
