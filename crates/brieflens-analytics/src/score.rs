//! Severity and confidence scoring policies shared by the detectors.
//!
//! Both detectors map a normalized deviation magnitude onto the same ordinal
//! severity ladder; only the cutoffs differ, because z-score units and IQR
//! units live on different scales. Confidence blends sample size and
//! deviation magnitude 30/70 and is always clamped to `[0, 1]`.

use brieflens_types::Severity;

/// Weight of the sample-size term in the confidence blend.
pub const SAMPLE_WEIGHT: f64 = 0.3;

/// Weight of the deviation term in the confidence blend.
pub const DEVIATION_WEIGHT: f64 = 0.7;

/// Sample count at which the size term saturates.
pub const FULL_CONFIDENCE_SAMPLES: f64 = 100.0;

/// Deviation-to-severity cutoffs, compared inclusively from the top down.
///
/// Cutoffs must descend (`critical >= high >= medium >= low`), which makes
/// the mapping monotone in the deviation by construction. Deviations below
/// `low` classify as `Info`; with the default detection thresholds that
/// level is only reachable when a caller lowers the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeverityScale {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl SeverityScale {
    /// Cutoffs for deviations in standard-deviation units.
    pub const Z_SCORE: Self = Self {
        critical: 5.0,
        high: 4.0,
        medium: 3.5,
        low: 3.0,
    };

    /// Cutoffs for deviations in IQR units past the fence.
    pub const IQR: Self = Self {
        critical: 3.0,
        high: 2.0,
        medium: 1.0,
        low: 0.5,
    };

    /// Classify a deviation magnitude.
    pub fn classify(&self, deviation: f64) -> Severity {
        if deviation >= self.critical {
            Severity::Critical
        } else if deviation >= self.high {
            Severity::High
        } else if deviation >= self.medium {
            Severity::Medium
        } else if deviation >= self.low {
            Severity::Low
        } else {
            Severity::Info
        }
    }
}

/// Confidence score for a flagged anomaly.
///
/// `clamp(0.3 * min(n / 100, 1) + 0.7 * min(deviation / cap, 1), 0, 1)`:
/// larger samples and larger deviations both raise trust in the flag. The
/// cap is the deviation at which the deviation term saturates (5.0 for
/// z-scores, 3.0 for IQR units).
pub fn confidence(sample_count: usize, deviation: f64, deviation_cap: f64) -> f64 {
    let size_term = (sample_count as f64 / FULL_CONFIDENCE_SAMPLES).min(1.0);
    let deviation_term = (deviation / deviation_cap).min(1.0);
    (SAMPLE_WEIGHT * size_term + DEVIATION_WEIGHT * deviation_term).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_score_cutoffs() {
        let scale = SeverityScale::Z_SCORE;
        assert_eq!(scale.classify(5.0), Severity::Critical);
        assert_eq!(scale.classify(4.2), Severity::High);
        assert_eq!(scale.classify(3.5), Severity::Medium);
        assert_eq!(scale.classify(3.0), Severity::Low);
        assert_eq!(scale.classify(2.99), Severity::Info);
    }

    #[test]
    fn iqr_cutoffs() {
        let scale = SeverityScale::IQR;
        assert_eq!(scale.classify(48.4), Severity::Critical);
        assert_eq!(scale.classify(2.0), Severity::High);
        assert_eq!(scale.classify(1.5), Severity::Medium);
        assert_eq!(scale.classify(0.5), Severity::Low);
        assert_eq!(scale.classify(0.0), Severity::Info);
    }

    #[test]
    fn severity_is_monotone_in_deviation() {
        for scale in [SeverityScale::Z_SCORE, SeverityScale::IQR] {
            let mut previous = scale.classify(0.0);
            let mut d = 0.0;
            while d < 8.0 {
                let current = scale.classify(d);
                assert!(
                    current >= previous,
                    "severity dropped from {:?} to {:?} at deviation {}",
                    previous,
                    current,
                    d
                );
                previous = current;
                d += 0.01;
            }
        }
    }

    #[test]
    fn confidence_clamped_to_unit_interval() {
        assert_eq!(confidence(1_000_000, 1000.0, 5.0), 1.0);
        assert!(confidence(0, 0.0, 5.0) >= 0.0);
        assert!(confidence(0, 0.0, 5.0) <= 1.0);
        assert!(confidence(10, 0.0, 3.0) <= 1.0);
    }

    #[test]
    fn confidence_blend_is_thirty_seventy() {
        // 20 samples, z = 4.353, cap 5.0:
        // 0.3 * 0.2 + 0.7 * (4.353 / 5.0)
        let c = confidence(20, 4.353, 5.0);
        assert!((c - (0.06 + 0.7 * 4.353 / 5.0)).abs() < 1e-12);

        // Saturated deviation term.
        let c = confidence(10, 48.357, 3.0);
        assert!((c - 0.73).abs() < 1e-12);
    }

    #[test]
    fn confidence_rewards_sample_size_and_deviation() {
        assert!(confidence(100, 3.0, 5.0) > confidence(10, 3.0, 5.0));
        assert!(confidence(50, 4.0, 5.0) > confidence(50, 3.0, 5.0));
    }
}
