//! The validated input sequence all analyzers operate on.
//!
//! Validation happens once, at construction: every value must be finite and
//! an optional timestamp column must match the value count. Analyzers borrow
//! the series read-only, so after this point they are total functions:
//! statistical edge cases degrade to neutral results instead of faulting.

use chrono::{DateTime, Utc};

use crate::error::{AnalysisError, AnalysisResult};

/// An ordered sequence of numeric values for one KPI, optionally paired
/// with timestamps.
///
/// Constructed and owned by the caller; analyzers never mutate it and never
/// retain a reference past the call.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSeries {
    values: Vec<f64>,
    timestamps: Option<Vec<DateTime<Utc>>>,
}

impl MetricSeries {
    /// Create a series, validating that every value is finite and that the
    /// timestamp column (when present) matches the value count.
    pub fn new(
        values: Vec<f64>,
        timestamps: Option<Vec<DateTime<Utc>>>,
    ) -> AnalysisResult<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnalysisError::NonFiniteValue { index });
        }
        if let Some(ts) = &timestamps {
            if ts.len() != values.len() {
                return Err(AnalysisError::TimestampCountMismatch {
                    values: values.len(),
                    timestamps: ts.len(),
                });
            }
        }
        Ok(Self { values, timestamps })
    }

    /// Create a series without timestamps.
    pub fn from_values(values: Vec<f64>) -> AnalysisResult<Self> {
        Self::new(values, None)
    }

    /// The ordered values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The timestamp column, if one was supplied.
    pub fn timestamps(&self) -> Option<&[DateTime<Utc>]> {
        self.timestamps.as_deref()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
