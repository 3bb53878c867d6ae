//! Aggregation of period stats into cumulative totals.

pub mod cumulative;

// Re-export main types and functions
pub use cumulative::{aggregate, CumulativeStats};
