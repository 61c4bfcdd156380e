use thiserror::Error;

/// Errors from the analytics core.
///
/// These cover caller bugs only. Statistical edge cases (short series,
/// constant series, zero spread) are normal operating conditions and are
/// signaled by empty or neutral results, never by an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    #[error("timestamp count mismatch: {values} values, {timestamps} timestamps")]
    TimestampCountMismatch { values: usize, timestamps: usize },

    #[error("invalid seasonal period: {period} (must be at least 2)")]
    InvalidPeriod { period: usize },
}

/// Convenience type alias for analytics results.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
