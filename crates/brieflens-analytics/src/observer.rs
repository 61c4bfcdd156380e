//! Injected observability hook.
//!
//! The analyzers run inside batch monitoring jobs where one metric's bad
//! data must not abort the batch, so skipped analyses are signaled through
//! an observer the caller supplies instead of a global logger. The default
//! `TracingObserver` forwards to `tracing`; tests substitute a recorder.

use std::sync::Arc;

use tracing::{debug, warn};

/// Why an analyzer returned an empty or neutral result instead of running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer points than the analyzer's minimum sample count.
    InsufficientData { have: usize, need: usize },
    /// Zero spread: all values identical, no meaningful deviation to score.
    DegenerateDistribution,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientData { have, need } => {
                write!(f, "insufficient data: {} points, need {}", have, need)
            }
            Self::DegenerateDistribution => write!(f, "degenerate distribution"),
        }
    }
}

/// Per-call reporting hook supplied by the caller.
///
/// All callbacks default to no-ops, so implementations override only what
/// they care about. Must be `Send + Sync`: analyzers are shared across
/// parallel workers.
pub trait AnalysisObserver: Send + Sync {
    /// An analysis was skipped and a neutral result returned.
    fn on_skip(&self, analyzer: &str, reason: SkipReason) {
        let _ = (analyzer, reason);
    }

    /// A detection pass completed.
    fn on_detection(&self, analyzer: &str, points: usize, anomalies: usize) {
        let _ = (analyzer, points, anomalies);
    }
}

/// Default observer: forwards to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn on_skip(&self, analyzer: &str, reason: SkipReason) {
        warn!(analyzer, %reason, "analysis skipped");
    }

    fn on_detection(&self, analyzer: &str, points: usize, anomalies: usize) {
        debug!(analyzer, points, anomalies, "detection complete");
    }
}

/// Observer that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl AnalysisObserver for NullObserver {}

/// The observer analyzers use when the caller supplies none.
pub fn default_observer() -> Arc<dyn AnalysisObserver> {
    Arc::new(TracingObserver)
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::Mutex;

    use super::{AnalysisObserver, SkipReason};

    /// Test observer that records every callback.
    #[derive(Debug, Default)]
    pub struct RecordingObserver {
        pub skips: Mutex<Vec<(String, SkipReason)>>,
        pub detections: Mutex<Vec<(String, usize, usize)>>,
    }

    impl AnalysisObserver for RecordingObserver {
        fn on_skip(&self, analyzer: &str, reason: SkipReason) {
            self.skips
                .lock()
                .unwrap()
                .push((analyzer.to_string(), reason));
        }

        fn on_detection(&self, analyzer: &str, points: usize, anomalies: usize) {
            self.detections
                .lock()
                .unwrap()
                .push((analyzer.to_string(), points, anomalies));
        }
    }
}
