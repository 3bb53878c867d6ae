//! Report data structures.
//!
//! Amounts are `U256` and serialize as decimal strings. Addresses serialize
//! in EIP-55 checksummed form.

use crate::aggregator::CumulativeStats;
use alloy_primitives::{Address, U256};
use serde::{Serialize, Serializer};

/// Kind of payout recorded by a distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionType {
    /// Paid to a referrer
    Rebate,
    /// Paid to a referred trader
    Discount,
}

/// One rebate or discount payout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEvent {
    /// Unix seconds
    pub timestamp: i64,

    pub transaction_hash: String,

    #[serde(serialize_with = "serialize_checksummed")]
    pub receiver: Address,

    /// Smallest token unit
    #[serde(serialize_with = "serialize_decimal")]
    pub amount: U256,

    #[serde(rename = "type")]
    pub distribution_type: DistributionType,

    #[serde(serialize_with = "serialize_checksummed")]
    pub token: Address,
}

/// A referrer's statistics for one period (total-to-date or one day)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStat {
    #[serde(serialize_with = "serialize_decimal")]
    pub volume: U256,

    pub trades: u64,

    pub traded_referrals_count: u64,

    /// USD with the subgraph's fixed implicit decimal scale
    #[serde(serialize_with = "serialize_decimal")]
    pub total_rebate_usd: U256,

    #[serde(serialize_with = "serialize_decimal")]
    pub discount_usd: U256,

    pub referral_code: String,
}

/// Totals for the account as a referred trader
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralTotalStats {
    #[serde(serialize_with = "serialize_decimal")]
    pub volume: U256,

    #[serde(serialize_with = "serialize_decimal")]
    pub discount_usd: U256,
}

/// Consolidated referral report for one account on one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub rebate_distributions: Vec<DistributionEvent>,
    pub discount_distributions: Vec<DistributionEvent>,
    pub referrer_total_stats: Vec<PeriodStat>,
    pub referrer_last_day_stats: Vec<PeriodStat>,
    pub cumulative_stats: CumulativeStats,
    pub codes: Vec<String>,
    pub referral_total_stats: ReferralTotalStats,
}

pub(crate) fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn serialize_checksummed<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&address.to_checksum(None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_distribution_serialization() {
        let event = DistributionEvent {
            timestamp: 1_660_000_000,
            transaction_hash: "0xabc".to_string(),
            receiver: address!("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"),
            amount: U256::from(10u64).pow(U256::from(30u64)),
            distribution_type: DistributionType::Rebate,
            token: address!("fb6916095ca1df60bb79ce92ce3ea74c37c5d359"),
        };

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["receiver"], "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(json["token"], "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
        assert_eq!(json["amount"], "1000000000000000000000000000000");
        assert_eq!(json["type"], "rebate");
        assert_eq!(json["transactionHash"], "0xabc");
    }
}
