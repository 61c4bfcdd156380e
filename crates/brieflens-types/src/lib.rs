//! Shared type definitions for brieflens KPI analytics.
//!
//! This crate provides the result records produced by the statistical
//! analyzers. No business logic, just types. The analyzers in
//! `brieflens-analytics` construct these records fresh on every call; the
//! consuming monitoring job persists and merges them.

#![deny(unsafe_code)]

pub mod anomaly;
pub mod decomposition;
pub mod severity;
pub mod statistics;
pub mod trend;

// Re-export primary types at crate root for ergonomic use.
pub use anomaly::{AnomalyKind, AnomalyRecord, RangeEstimate};
pub use decomposition::Decomposition;
pub use severity::Severity;
pub use statistics::{DistributionSummary, QuartileSummary};
pub use trend::{TrendDirection, TrendRecord};
