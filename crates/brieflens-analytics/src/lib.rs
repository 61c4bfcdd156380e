//! # brieflens-analytics
//!
//! Statistical anomaly and trend detection for KPI time series.
//!
//! Four stateless, side-effect-free analyzers share one input shape (an
//! ordered numeric sequence, optionally paired with timestamps) and are
//! composed by the caller (the KPI monitoring job), which runs one or more
//! of them per metric and merges the outputs.
//!
//! ## Architecture
//!
//! ```text
//!   MetricSeries (validated once: finite values, matching timestamps)
//!       │
//!       ├──► ZScoreDetector     ──► Vec<AnomalyRecord>
//!       ├──► IqrDetector        ──► Vec<AnomalyRecord>
//!       ├──► TrendAnalyzer      ──► TrendRecord
//!       └──► SeasonalDecomposer ──► Decomposition
//!                                    │ residual
//!                                    └──► (optionally fed back into a
//!                                          detector to score with the
//!                                          periodic swing removed)
//! ```
//!
//! No analyzer depends on another's output, holds state between calls, or
//! retains a reference to its input. Every call is independent and safe to
//! run concurrently across metrics, workspaces, or detector types.
//!
//! Statistical edge cases (short windows, constant series, zero IQR) are
//! normal operating conditions: analyzers return empty or neutral results
//! and notify the injected [`AnalysisObserver`]. Caller bugs (non-finite
//! values, mismatched timestamp columns, nonsensical periods) fail loudly
//! with [`AnalysisError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use brieflens_analytics::{IqrDetector, MetricSeries, ZScoreDetector};
//!
//! let series = MetricSeries::from_values(vec![
//!     10.0, 12.0, 11.0, 13.0, 12.0, 10.0, 11.0, 12.0, 13.0, 100.0,
//! ])?;
//!
//! let anomalies = IqrDetector::default().detect(&series);
//! assert_eq!(anomalies[0].index, 9);
//!
//! let expected = ZScoreDetector::default().expected_value(&series);
//! assert_eq!(expected, Some(20.4));
//! # Ok::<(), brieflens_analytics::AnalysisError>(())
//! ```

#![deny(unsafe_code)]

pub mod anomaly;
pub mod error;
pub mod observer;
pub mod score;
pub mod seasonal;
pub mod series;
pub mod stats;
pub mod trend;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use anomaly::{
    IqrConfig, IqrDetector, ZScoreConfig, ZScoreDetector, DEFAULT_IQR_MULTIPLIER,
    DEFAULT_MIN_SAMPLES, DEFAULT_Z_SCORE_THRESHOLD, EXTREME_IQR_MULTIPLIER,
};
pub use error::{AnalysisError, AnalysisResult};
pub use observer::{AnalysisObserver, NullObserver, SkipReason, TracingObserver};
pub use score::{confidence, SeverityScale};
pub use seasonal::SeasonalDecomposer;
pub use series::MetricSeries;
pub use trend::{TrendAnalyzer, TrendConfig, DEFAULT_FLAT_THRESHOLD};

// Result records are defined in brieflens-types; re-exported here so most
// callers need a single dependency.
pub use brieflens_types::{
    AnomalyKind, AnomalyRecord, Decomposition, DistributionSummary, QuartileSummary,
    RangeEstimate, Severity, TrendDirection, TrendRecord,
};
