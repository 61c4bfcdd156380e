//! Ordinal severity classification for detected anomalies.

use serde::{Deserialize, Serialize};

/// Severity of a detected anomaly, used for alert prioritization.
///
/// Ordered: `Info < Low < Medium < High < Critical`. Scoring policies must
/// keep severity monotone in the deviation magnitude: a larger deviation
/// never maps to a lower severity.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Noteworthy but below every alerting cutoff.
    Info,
    /// Just past the detection threshold.
    Low,
    /// Warrants a look during the next review.
    Medium,
    /// Warrants investigation soon.
    High,
    /// Requires immediate attention.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}
