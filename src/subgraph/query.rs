//! GraphQL query text for the referrals subgraph.

use crate::utils::config::{DISTRIBUTION_TYPE_DISCOUNT, DISTRIBUTION_TYPE_REBATES, QUERY_PAGE_SIZE};

const REFERRALS_QUERY_TEMPLATE: &str = r#"{
  distributions(
    first: __PAGE_SIZE__,
    orderBy: timestamp,
    orderDirection: desc,
    where: {
      receiver: "__ACCOUNT__",
      typeId_in: ["__DISTRIBUTION_TYPE_REBATES__", "__DISTRIBUTION_TYPE_DISCOUNT__"]
    }
  ) {
    receiver
    amount
    typeId
    token
    transactionHash
    timestamp
  }
  referrerTotalStats: referrerStats(
    first: __PAGE_SIZE__
    where: {
      period: total
      referrer: "__ACCOUNT__"
    }
  ) {
    referralCode,
    volume,
    trades,
    tradedReferralsCount,
    totalRebateUsd,
    discountUsd
  }
  referrerLastDayStats: referrerStats(
    first: __PAGE_SIZE__
    where: {
      period: daily
      referrer: "__ACCOUNT__"
      timestamp: __TIMESTAMP__
    }
  ) {
    referralCode,
    volume,
    trades,
    tradedReferralsCount,
    totalRebateUsd,
    discountUsd
  }
  referralCodes(
    first: __PAGE_SIZE__,
    where: {
      owner: "__ACCOUNT__"
    }
  ) {
    code
  }
  referralTotalStats: referralStat(
    id: "total:0:__ACCOUNT__"
  ) {
    volume,
    discountUsd
  }
}"#;

/// Build the referrals query for one account
///
/// # Arguments
/// * `account` - Account address, embedded lower-cased
/// * `day_start` - Start of the UTC day, exact key of the daily stats bucket
pub fn build_referrals_query(account: &str, day_start: i64) -> String {
    REFERRALS_QUERY_TEMPLATE
        .replace("__PAGE_SIZE__", &QUERY_PAGE_SIZE.to_string())
        .replace("__ACCOUNT__", &account.to_lowercase())
        .replace("__DISTRIBUTION_TYPE_REBATES__", DISTRIBUTION_TYPE_REBATES)
        .replace("__DISTRIBUTION_TYPE_DISCOUNT__", DISTRIBUTION_TYPE_DISCOUNT)
        .replace("__TIMESTAMP__", &day_start.to_string())
}
