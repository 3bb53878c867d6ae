//! Configuration and constants for the referral report.

use std::collections::BTreeMap;
use std::time::Duration;

/// Default timeout for subgraph requests
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report document schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Length of a UTC day, used to bucket daily stats
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Maximum number of records requested per collection
pub const QUERY_PAGE_SIZE: usize = 1000;

// Distribution type discriminators as stored by the referrals subgraph
pub const DISTRIBUTION_TYPE_REBATES: &str = "1";
pub const DISTRIBUTION_TYPE_DISCOUNT: &str = "2";

pub const ARBITRUM_CHAIN_ID: u64 = 42161;
pub const ARBITRUM_REFERRALS_SUBGRAPH: &str =
    "https://api.thegraph.com/subgraphs/name/gmx-io/gmx-arbitrum-referrals";

/// Chain id to subgraph endpoint mapping
///
/// Handed to the report assembler at construction time. Chains absent from
/// the mapping are unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEndpoints {
    endpoints: BTreeMap<u64, String>,
}

impl ChainEndpoints {
    /// Empty mapping (every chain unsupported)
    pub fn empty() -> Self {
        Self {
            endpoints: BTreeMap::new(),
        }
    }

    /// Add or replace the endpoint for a chain
    pub fn with_endpoint(mut self, chain_id: u64, url: impl Into<String>) -> Self {
        self.endpoints.insert(chain_id, url.into());
        self
    }

    /// Apply `(chain_id, url)` overrides on top of the current mapping
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (u64, String)>,
    {
        self.endpoints.extend(overrides);
        self
    }

    pub fn get(&self, chain_id: u64) -> Option<&str> {
        self.endpoints.get(&chain_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.endpoints.iter().map(|(id, url)| (*id, url.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl Default for ChainEndpoints {
    fn default() -> Self {
        Self::empty().with_endpoint(ARBITRUM_CHAIN_ID, ARBITRUM_REFERRALS_SUBGRAPH)
    }
}

/// Parse a `<CHAIN_ID>=<URL>` endpoint override
///
/// Used as a clap value parser for `--endpoint`.
pub fn parse_endpoint_override(value: &str) -> Result<(u64, String), String> {
    let (chain, url) = value
        .split_once('=')
        .ok_or_else(|| format!("expected <CHAIN_ID>=<URL>, got {:?}", value))?;

    let chain_id = chain
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid chain id {:?}: {}", chain, e))?;

    let url = url.trim();
    if url.is_empty() {
        return Err(format!("empty endpoint URL for chain {}", chain_id));
    }

    Ok((chain_id, url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints_include_arbitrum() {
        let endpoints = ChainEndpoints::default();
        assert_eq!(
            endpoints.get(ARBITRUM_CHAIN_ID),
            Some(ARBITRUM_REFERRALS_SUBGRAPH)
        );
        assert_eq!(endpoints.get(43114), None);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let endpoints = ChainEndpoints::default().with_overrides(vec![
            (ARBITRUM_CHAIN_ID, "http://localhost:8000".to_string()),
            (43114, "http://localhost:8001".to_string()),
        ]);

        assert_eq!(endpoints.get(ARBITRUM_CHAIN_ID), Some("http://localhost:8000"));
        assert_eq!(endpoints.get(43114), Some("http://localhost:8001"));
    }

    #[test]
    fn test_parse_endpoint_override() {
        assert_eq!(
            parse_endpoint_override("42161=http://localhost:8000/subgraphs"),
            Ok((42161, "http://localhost:8000/subgraphs".to_string()))
        );
        assert!(parse_endpoint_override("42161").is_err());
        assert!(parse_endpoint_override("arb=http://x").is_err());
        assert!(parse_endpoint_override("42161=").is_err());
    }
}
