//! Types for GraphQL communication with the referrals subgraph.
//!
//! Numeric fields arrive as decimal strings (subgraph `BigInt`) and are kept
//! as text here. The normalizer turns them into typed values.

use serde::{Deserialize, Serialize};

/// GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// GraphQL error object
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Everything the referrals query returns for one account
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralsQueryData {
    pub distributions: Vec<RawDistribution>,
    pub referrer_total_stats: Vec<RawPeriodStat>,
    pub referrer_last_day_stats: Vec<RawPeriodStat>,
    pub referral_codes: Vec<RawReferralCode>,
    #[serde(default)]
    pub referral_total_stats: Option<RawReferralStat>,
}

/// A rebate or discount payout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDistribution {
    pub receiver: String,
    pub amount: String,
    pub type_id: String,
    pub token: String,
    pub transaction_hash: String,
    pub timestamp: String,
}

/// Referrer statistics for one period bucket
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPeriodStat {
    pub referral_code: String,
    pub volume: String,
    pub trades: String,
    pub traded_referrals_count: String,
    pub total_rebate_usd: String,
    pub discount_usd: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawReferralCode {
    pub code: String,
}

/// Totals for the account as a referred trader
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReferralStat {
    pub volume: String,
    pub discount_usd: String,
}
