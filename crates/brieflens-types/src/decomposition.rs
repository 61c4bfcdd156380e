//! Seasonal decomposition result.

use serde::{Deserialize, Serialize};

/// Additive decomposition of a series into trend, seasonal, and residual
/// components.
///
/// All three component sequences have the same length as the input series;
/// indices correspond 1:1 to input positions, matching the
/// `AnomalyRecord.index` convention.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    pub trend: Vec<f64>,
    pub seasonal: Vec<f64>,
    pub residual: Vec<f64>,
    /// The period the decomposition was computed with.
    pub period: usize,
}

impl Decomposition {
    /// Length of the component sequences.
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// Whether the decomposition is empty.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Rebuild the input series from the components
    /// (`trend + seasonal + residual` at each index).
    pub fn reconstructed(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .zip(&self.residual)
            .map(|((t, s), r)| t + s + r)
            .collect()
    }
}
