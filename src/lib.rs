//! Referral Report
//!
//! Referral program reports for a decentralized exchange: rebates and
//! discounts received, referrer trading stats and owned referral codes,
//! fetched from a referrals subgraph and consolidated into one report.
//!
//! This crate provides the core implementation for the
//! `referral-report` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! referral-report report --chain 42161 --account 0x...
//! referral-report encode MYCODE
//! ```

pub mod aggregator;
pub mod codec;
pub mod commands;
pub mod normalizer;
pub mod output;
pub mod report;
pub mod subgraph;
pub mod utils;
