//! Anomaly result records.
//!
//! An `AnomalyRecord` points at one position in the analyzed series. Records
//! are produced fresh on every detection call and never mutated afterward;
//! the `index` is meaningless outside the call that produced it.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

// ── Anomaly Kind ────────────────────────────────────────────────────────

/// Direction of a flagged deviation relative to the expected band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    /// Value above the expected band.
    Spike,
    /// Value below the expected band.
    Drop,
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spike => write!(f, "spike"),
            Self::Drop => write!(f, "drop"),
        }
    }
}

// ── Anomaly Record ──────────────────────────────────────────────────────

/// One flagged point in an analyzed metric series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Zero-based position in the input sequence. Always in bounds for the
    /// series the record was produced from.
    pub index: usize,
    /// The observed value at `index`.
    pub value: f64,
    /// Normalized deviation magnitude (standard-deviation units for the
    /// z-score detector, IQR units for the quartile detector).
    pub deviation: f64,
    /// Whether the value overshot or undershot the expected band.
    pub kind: AnomalyKind,
    /// Ordinal severity derived from `deviation`.
    pub severity: Severity,
    /// Detection confidence in `[0.0, 1.0]`, blending sample size and
    /// deviation magnitude.
    pub confidence: f64,
}

// ── Range Estimate ──────────────────────────────────────────────────────

/// The "expected" value band for a series.
///
/// Used both for outlier testing and for downstream "how far outside
/// normal" displays.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeEstimate {
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl RangeEstimate {
    /// Whether a value falls inside the band (bounds inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }

    /// Width of the band.
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anomaly_kind_display() {
        assert_eq!(AnomalyKind::Spike.to_string(), "spike");
        assert_eq!(AnomalyKind::Drop.to_string(), "drop");
    }

    #[test]
    fn anomaly_record_serde_roundtrip() {
        let record = AnomalyRecord {
            index: 9,
            value: 100.0,
            deviation: 4.2,
            kind: AnomalyKind::Spike,
            severity: Severity::High,
            confidence: 0.67,
        };
        let json = serde_json::to_string(&record).unwrap();
        let restored: AnomalyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn range_estimate_contains_bounds() {
        let range = RangeEstimate {
            lower_bound: 8.375,
            upper_bound: 15.375,
        };
        assert!(range.contains(8.375));
        assert!(range.contains(12.0));
        assert!(range.contains(15.375));
        assert!(!range.contains(15.376));
        assert!(!range.contains(-3.0));
        assert!((range.width() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn collapsed_range_contains_only_the_constant() {
        let range = RangeEstimate {
            lower_bound: 5.0,
            upper_bound: 5.0,
        };
        assert!(range.contains(5.0));
        assert!(!range.contains(5.1));
        assert_eq!(range.width(), 0.0);
    }
}
