//! Trend classification records.

use serde::{Deserialize, Serialize};

/// Directional movement of a metric over the analyzed window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Summary of directional movement over an analysis window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    /// Classified direction.
    pub direction: TrendDirection,
    /// Normalized slope: fraction of the series scale per step. Signed,
    /// negative for downward movement.
    pub magnitude: f64,
    /// Model-fit confidence in `[0.0, 1.0]`.
    pub confidence: f64,
}

impl TrendRecord {
    /// Neutral result for windows too short or too degenerate to classify.
    pub fn flat() -> Self {
        Self {
            direction: TrendDirection::Flat,
            magnitude: 0.0,
            confidence: 0.0,
        }
    }
}
