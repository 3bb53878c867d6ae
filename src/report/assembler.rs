//! Report assembly.
//!
//! The assembler:
//! 1. Resolves the chain to a query executor
//! 2. Builds the referrals query for the account and current UTC day
//! 3. Executes the query
//! 4. Normalizes distributions and splits them into rebates and discounts
//! 5. Normalizes period stats and aggregates the total-period ones
//! 6. Assembles the report

use super::schema::{DistributionEvent, DistributionType, Report};
use crate::aggregator::aggregate;
use crate::codec::{decode_referral_code, parse_encoded_code};
use crate::normalizer::{normalize, normalize_distribution, normalize_referral_totals};
use crate::subgraph::{build_referrals_query, QueryExecutor, ReferralsQueryData, SubgraphClient};
use crate::utils::config::{ChainEndpoints, SECONDS_PER_DAY};
use crate::utils::error::{NormalizeError, ReportError, RetrievalError};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::collections::BTreeMap;

/// Builds referral reports from per-chain query executors
pub struct ReportAssembler<E> {
    executors: BTreeMap<u64, E>,
}

impl<E: QueryExecutor> ReportAssembler<E> {
    /// Assembler with no supported chains
    pub fn new() -> Self {
        Self {
            executors: BTreeMap::new(),
        }
    }

    /// Register the executor serving `chain_id`
    pub fn with_executor(mut self, chain_id: u64, executor: E) -> Self {
        self.executors.insert(chain_id, executor);
        self
    }

    pub fn supports_chain(&self, chain_id: u64) -> bool {
        self.executors.contains_key(&chain_id)
    }

    /// Fetch the report for `account` on `chain_id` as of now
    ///
    /// **Public** - main entry point
    ///
    /// # Errors
    /// * `ReportError::UnsupportedChain` - no executor for the chain; nothing
    ///   is queried
    /// * `ReportError::Retrieval` - query failed or returned malformed data
    pub fn fetch_report(&self, chain_id: u64, account: &str) -> Result<Report, ReportError> {
        self.fetch_report_at(chain_id, account, Utc::now())
    }

    /// Fetch the report with an explicit clock reading
    pub fn fetch_report_at(
        &self,
        chain_id: u64,
        account: &str,
        now: DateTime<Utc>,
    ) -> Result<Report, ReportError> {
        let executor = self
            .executors
            .get(&chain_id)
            .ok_or(ReportError::UnsupportedChain(chain_id))?;

        let account = account.to_lowercase();
        let day_start = start_of_utc_day(now);

        info!("Fetching referral report for {} on chain {}", account, chain_id);
        debug!("Last-day stats bucket: {}", day_start);

        let query = build_referrals_query(&account, day_start);
        let data = executor.execute(&query)?;

        let report = assemble_report(&data).map_err(RetrievalError::from)?;

        info!(
            "Report ready: {} rebates, {} discounts, {} codes",
            report.rebate_distributions.len(),
            report.discount_distributions.len(),
            report.codes.len()
        );

        Ok(report)
    }
}

impl<E: QueryExecutor> Default for ReportAssembler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportAssembler<SubgraphClient> {
    /// One subgraph client per configured endpoint
    pub fn from_endpoints(endpoints: &ChainEndpoints) -> Result<Self, RetrievalError> {
        endpoints
            .iter()
            .try_fold(Self::new(), |assembler, (chain_id, url)| {
                Ok(assembler.with_executor(chain_id, SubgraphClient::new(url)?))
            })
    }
}

/// Turn query results into a report
///
/// **Public** - pure; used by `fetch_report_at` once data has arrived
pub fn assemble_report(data: &ReferralsQueryData) -> Result<Report, NormalizeError> {
    let events = data
        .distributions
        .iter()
        .map(normalize_distribution)
        .collect::<Result<Vec<_>, _>>()?;
    let (rebate_distributions, discount_distributions) = partition_distributions(events);

    let referrer_total_stats = data
        .referrer_total_stats
        .iter()
        .map(normalize)
        .collect::<Result<Vec<_>, _>>()?;

    let referrer_last_day_stats = data
        .referrer_last_day_stats
        .iter()
        .map(normalize)
        .collect::<Result<Vec<_>, _>>()?;

    let codes = data
        .referral_codes
        .iter()
        .map(|c| parse_encoded_code(&c.code).map(|encoded| decode_referral_code(&encoded)))
        .collect::<Result<Vec<_>, _>>()?;

    let cumulative_stats = aggregate(&referrer_total_stats);
    let referral_total_stats = normalize_referral_totals(data.referral_total_stats.as_ref())?;

    Ok(Report {
        rebate_distributions,
        discount_distributions,
        referrer_total_stats,
        referrer_last_day_stats,
        cumulative_stats,
        codes,
        referral_total_stats,
    })
}

/// Split events into (rebates, discounts), keeping input order in each
pub fn partition_distributions(
    events: Vec<DistributionEvent>,
) -> (Vec<DistributionEvent>, Vec<DistributionEvent>) {
    events
        .into_iter()
        .partition(|event| event.distribution_type == DistributionType::Rebate)
}

/// Unix seconds of the start of `now`'s UTC day
pub fn start_of_utc_day(now: DateTime<Utc>) -> i64 {
    now.timestamp().div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::CumulativeStats;
    use crate::report::schema::ReferralTotalStats;
    use chrono::TimeZone;

    #[test]
    fn test_start_of_utc_day() {
        let now = Utc.with_ymd_and_hms(2022, 8, 9, 17, 45, 12).unwrap();
        let midnight = Utc.with_ymd_and_hms(2022, 8, 9, 0, 0, 0).unwrap();

        assert_eq!(start_of_utc_day(now), midnight.timestamp());
        assert_eq!(start_of_utc_day(midnight), midnight.timestamp());
        assert_eq!(start_of_utc_day(midnight) % SECONDS_PER_DAY, 0);
    }

    #[test]
    fn test_assemble_empty_data() {
        let report = assemble_report(&ReferralsQueryData::default()).unwrap();

        assert!(report.rebate_distributions.is_empty());
        assert!(report.discount_distributions.is_empty());
        assert!(report.codes.is_empty());
        assert_eq!(report.cumulative_stats, CumulativeStats::default());
        assert_eq!(report.referral_total_stats, ReferralTotalStats::default());
    }
}
