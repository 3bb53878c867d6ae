//! Client for the referrals indexing service (a GraphQL subgraph).

pub mod client;
pub mod query;
pub mod types;

// Re-export main types
pub use client::{QueryExecutor, SubgraphClient};
pub use query::build_referrals_query;
pub use types::{RawDistribution, RawPeriodStat, RawReferralCode, RawReferralStat, ReferralsQueryData};
