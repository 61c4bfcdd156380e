//! Additive seasonal decomposition.
//!
//! Splits a series into trend, seasonal, and residual components so anomaly
//! scoring can run against the residual instead of the raw values, removing
//! expected periodic swings. The model is additive
//! (`value = trend + seasonal + residual`); metrics with multiplicative
//! seasonality should be log-transformed by the caller first.
//!
//! ```text
//!   MetricSeries + period
//!       │
//!       ├── trend:    centered moving average, window = period
//!       ├── seasonal: per-phase mean of the detrended interior, centered
//!       └── residual: value - trend - seasonal
//! ```

use std::sync::Arc;

use brieflens_types::Decomposition;

use crate::error::{AnalysisError, AnalysisResult};
use crate::observer::{default_observer, AnalysisObserver, SkipReason};
use crate::series::MetricSeries;

const ANALYZER_NAME: &str = "seasonal";

/// Centered-moving-average seasonal decomposer.
///
/// Stateless; the period is supplied per call because the same metric may
/// be analyzed at several candidate periods.
pub struct SeasonalDecomposer {
    observer: Arc<dyn AnalysisObserver>,
}

impl SeasonalDecomposer {
    /// Create a decomposer with the default tracing observer.
    pub fn new() -> Self {
        Self {
            observer: default_observer(),
        }
    }

    /// Replace the reporting observer.
    pub fn with_observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Decompose the series at the given period.
    ///
    /// A period below 2 is a caller bug and fails loudly. A series shorter
    /// than two full periods degrades to "no seasonality detected": the
    /// full series as trend, all-zero seasonal and residual components.
    /// All three components have the input's length, indexed 1:1 with it.
    pub fn decompose(
        &self,
        series: &MetricSeries,
        period: usize,
    ) -> AnalysisResult<Decomposition> {
        if period < 2 {
            return Err(AnalysisError::InvalidPeriod { period });
        }

        let values = series.values();
        let n = values.len();
        if n < 2 * period {
            self.observer.on_skip(
                ANALYZER_NAME,
                SkipReason::InsufficientData {
                    have: n,
                    need: 2 * period,
                },
            );
            return Ok(Decomposition {
                trend: values.to_vec(),
                seasonal: vec![0.0; n],
                residual: vec![0.0; n],
                period,
            });
        }

        let trend = centered_moving_average(values, period);

        // Per-phase means of the detrended series. Only interior indices,
        // where the moving average was actually computed, contribute, so
        // the edge extension cannot pollute the seasonal profile.
        let half = period / 2;
        let mut phase_sums = vec![0.0; period];
        let mut phase_counts = vec![0usize; period];
        for i in half..n - half {
            phase_sums[i % period] += values[i] - trend[i];
            phase_counts[i % period] += 1;
        }
        let mut phase_means: Vec<f64> = phase_sums
            .iter()
            .zip(&phase_counts)
            .map(|(sum, &count)| if count > 0 { sum / count as f64 } else { 0.0 })
            .collect();

        // Center the profile so the seasonal component sums to ~zero over
        // one period; any constant offset belongs to the trend.
        let offset = phase_means.iter().sum::<f64>() / period as f64;
        for m in &mut phase_means {
            *m -= offset;
        }

        let seasonal: Vec<f64> = (0..n).map(|i| phase_means[i % period]).collect();
        let residual: Vec<f64> = (0..n)
            .map(|i| values[i] - trend[i] - seasonal[i])
            .collect();

        Ok(Decomposition {
            trend,
            seasonal,
            residual,
            period,
        })
    }
}

impl Default for SeasonalDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Centered moving average of window `period`, edges extended with the
/// nearest interior value.
///
/// Even periods use the standard half-weighted ends (a 2-by-period average)
/// so the window stays centered on the point.
fn centered_moving_average(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let half = period / 2;
    let mut trend = vec![0.0; n];

    for i in half..n - half {
        let window_mean = if period % 2 == 1 {
            values[i - half..=i + half].iter().sum::<f64>() / period as f64
        } else {
            let mut sum = 0.5 * values[i - half] + 0.5 * values[i + half];
            sum += values[i - half + 1..i + half].iter().sum::<f64>();
            sum / period as f64
        };
        trend[i] = window_mean;
    }

    // Extend edges; interior is non-empty because n >= 2 * period.
    for i in 0..half {
        trend[i] = trend[half];
    }
    for i in n - half..n {
        trend[i] = trend[n - half - 1];
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::recording::RecordingObserver;

    fn series(values: Vec<f64>) -> MetricSeries {
        MetricSeries::from_values(values).unwrap()
    }

    /// Base 10 plus a fixed 4-phase pattern, no trend, no noise.
    fn periodic_series(cycles: usize) -> (Vec<f64>, [f64; 4]) {
        let pattern = [0.0, 5.0, -3.0, 1.0];
        let values = (0..cycles * 4).map(|i| 10.0 + pattern[i % 4]).collect();
        (values, pattern)
    }

    #[test]
    fn period_below_two_is_an_error() {
        let decomposer = SeasonalDecomposer::new();
        let s = series(vec![1.0; 12]);
        assert_eq!(
            decomposer.decompose(&s, 0).unwrap_err(),
            AnalysisError::InvalidPeriod { period: 0 }
        );
        assert_eq!(
            decomposer.decompose(&s, 1).unwrap_err(),
            AnalysisError::InvalidPeriod { period: 1 }
        );
    }

    #[test]
    fn short_series_degrades_to_no_seasonality() {
        let observer = Arc::new(RecordingObserver::default());
        let decomposer = SeasonalDecomposer::new().with_observer(observer.clone());
        let values = vec![3.0, 4.0, 5.0, 6.0, 7.0];
        let d = decomposer.decompose(&series(values.clone()), 4).unwrap();

        assert_eq!(d.trend, values);
        assert_eq!(d.seasonal, vec![0.0; 5]);
        assert_eq!(d.residual, vec![0.0; 5]);
        assert_eq!(d.period, 4);

        let skips = observer.skips.lock().unwrap();
        assert_eq!(
            skips[0],
            (
                "seasonal".to_string(),
                SkipReason::InsufficientData { have: 5, need: 8 }
            )
        );
    }

    #[test]
    fn components_match_input_length() {
        let (values, _) = periodic_series(6);
        let d = SeasonalDecomposer::new()
            .decompose(&series(values.clone()), 4)
            .unwrap();
        assert_eq!(d.len(), values.len());
        assert_eq!(d.trend.len(), values.len());
        assert_eq!(d.seasonal.len(), values.len());
        assert_eq!(d.residual.len(), values.len());
    }

    #[test]
    fn perfect_periodic_series_has_near_zero_residuals() {
        let (values, pattern) = periodic_series(6);
        let d = SeasonalDecomposer::new()
            .decompose(&series(values), 4)
            .unwrap();

        // The DC offset of the pattern (mean 0.75) lands in the trend;
        // the seasonal component is the centered pattern.
        let pattern_mean = pattern.iter().sum::<f64>() / 4.0;
        for (i, &s) in d.seasonal.iter().enumerate() {
            assert!(
                (s - (pattern[i % 4] - pattern_mean)).abs() < 1e-9,
                "seasonal[{}] = {}",
                i,
                s
            );
        }
        for (i, &t) in d.trend.iter().enumerate() {
            assert!((t - (10.0 + pattern_mean)).abs() < 1e-9, "trend[{}] = {}", i, t);
        }
        for (i, &r) in d.residual.iter().enumerate() {
            assert!(r.abs() < 1e-9, "residual[{}] = {}", i, r);
        }
    }

    #[test]
    fn odd_period_decomposition_is_exact_too() {
        let pattern = [2.0, -1.0, -1.0];
        let values: Vec<f64> = (0..18).map(|i| 20.0 + pattern[i % 3]).collect();
        let d = SeasonalDecomposer::new()
            .decompose(&series(values), 3)
            .unwrap();

        for (i, &s) in d.seasonal.iter().enumerate() {
            assert!((s - pattern[i % 3]).abs() < 1e-9);
        }
        for &r in &d.residual {
            assert!(r.abs() < 1e-9);
        }
    }

    #[test]
    fn seasonal_component_sums_to_zero_over_one_period() {
        let (values, _) = periodic_series(8);
        let d = SeasonalDecomposer::new()
            .decompose(&series(values), 4)
            .unwrap();
        let sum: f64 = d.seasonal[..4].iter().sum();
        assert!(sum.abs() < 1e-9);
    }

    #[test]
    fn linear_trend_recovered_in_the_interior() {
        let pattern = [0.0, 5.0, -3.0, 1.0];
        let values: Vec<f64> = (0..40)
            .map(|i| 0.5 * i as f64 + pattern[i % 4])
            .collect();
        let d = SeasonalDecomposer::new()
            .decompose(&series(values), 4)
            .unwrap();

        // A centered average reproduces a linear trend exactly away from
        // the edges (up to the pattern's constant offset).
        let pattern_mean: f64 = pattern.iter().sum::<f64>() / 4.0;
        for i in 2..38 {
            assert!(
                (d.trend[i] - (0.5 * i as f64 + pattern_mean)).abs() < 1e-9,
                "trend[{}] = {}",
                i,
                d.trend[i]
            );
            assert!(d.residual[i].abs() < 1e-9, "residual[{}]", i);
        }
    }

    #[test]
    fn noisy_periodic_series_recovers_the_profile() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let pattern = [0.0, 5.0, -3.0, 1.0];
        let values: Vec<f64> = (0..80)
            .map(|i| 10.0 + pattern[i % 4] + rng.gen_range(-0.5..0.5))
            .collect();
        let d = SeasonalDecomposer::new()
            .decompose(&series(values), 4)
            .unwrap();

        // Noise averages out across ~19 occurrences of each phase, so the
        // recovered profile stays well within the pattern's amplitude.
        let pattern_mean = pattern.iter().sum::<f64>() / 4.0;
        for (phase, &expected) in pattern.iter().enumerate() {
            assert!(
                (d.seasonal[phase] - (expected - pattern_mean)).abs() < 1.0,
                "phase {} recovered as {}",
                phase,
                d.seasonal[phase]
            );
        }
    }

    #[test]
    fn reconstruction_matches_input() {
        let (values, _) = periodic_series(5);
        let d = SeasonalDecomposer::new()
            .decompose(&series(values.clone()), 4)
            .unwrap();
        for (rebuilt, original) in d.reconstructed().iter().zip(&values) {
            assert!((rebuilt - original).abs() < 1e-9);
        }
    }

    #[test]
    fn decomposition_is_idempotent() {
        let (values, _) = periodic_series(6);
        let decomposer = SeasonalDecomposer::new();
        let s = series(values);
        assert_eq!(
            decomposer.decompose(&s, 4).unwrap(),
            decomposer.decompose(&s, 4).unwrap()
        );
    }
}
