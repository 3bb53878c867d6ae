//! Referral report assembly.
//!
//! This module turns subgraph query results into a consolidated report:
//! - Distributions split into rebates and discounts
//! - Normalized total and last-day referrer stats
//! - Cumulative totals over the total-period stats
//! - Owned referral codes and referred-trader totals

pub mod assembler;
pub mod schema;
pub mod slot;

// Re-export main types and functions
pub use assembler::{assemble_report, partition_distributions, start_of_utc_day, ReportAssembler};
pub use schema::{DistributionEvent, DistributionType, PeriodStat, ReferralTotalStats, Report};
pub use slot::{ApplyOutcome, ReportParams, ReportSlot, RequestTicket};
