//! Output writers for report data.

pub mod json;

// Re-export main functions
pub use json::{report_to_string, write_report, ReportDocument};
