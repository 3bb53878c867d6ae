//! Cumulative referrer statistics.
//!
//! Period stats are summed field by field. Addition is the only operation,
//! so the fold can be split and recombined in any order.

use crate::report::schema::{serialize_decimal, PeriodStat};
use alloy_primitives::U256;
use log::debug;
use serde::Serialize;

/// Sum of a sequence of period stats
///
/// `Default` is the identity: every field zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeStats {
    /// Sum of `total_rebate_usd`
    #[serde(serialize_with = "serialize_decimal")]
    pub rebates: U256,

    #[serde(serialize_with = "serialize_decimal")]
    pub volume: U256,

    #[serde(serialize_with = "serialize_decimal")]
    pub discount_usd: U256,

    pub trades: u64,

    /// Sum of `traded_referrals_count`
    pub referrals_count: u64,
}

impl CumulativeStats {
    /// Add one period stat to the running totals
    pub fn add_period(mut self, stat: &PeriodStat) -> Self {
        self.rebates = self.rebates.saturating_add(stat.total_rebate_usd);
        self.volume = self.volume.saturating_add(stat.volume);
        self.discount_usd = self.discount_usd.saturating_add(stat.discount_usd);
        self.trades = self.trades.saturating_add(stat.trades);
        self.referrals_count = self.referrals_count.saturating_add(stat.traded_referrals_count);
        self
    }

    /// Field-wise sum of two partial aggregates
    pub fn combine(self, other: &CumulativeStats) -> Self {
        Self {
            rebates: self.rebates.saturating_add(other.rebates),
            volume: self.volume.saturating_add(other.volume),
            discount_usd: self.discount_usd.saturating_add(other.discount_usd),
            trades: self.trades.saturating_add(other.trades),
            referrals_count: self.referrals_count.saturating_add(other.referrals_count),
        }
    }
}

/// Reduce period stats into cumulative totals
///
/// **Public** - empty input yields `CumulativeStats::default()`
pub fn aggregate(stats: &[PeriodStat]) -> CumulativeStats {
    debug!("Aggregating {} period stats", stats.len());

    stats
        .iter()
        .fold(CumulativeStats::default(), CumulativeStats::add_period)
}
