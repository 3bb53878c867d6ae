//! Normalization of raw subgraph records.
//!
//! Raw records carry numbers as decimal text and referral codes as hex.
//! Normalized records carry `u64`/`U256` values, checksummed addresses and
//! decoded codes. Everything here is pure.

pub mod distribution;
pub mod stats;

// Re-export main functions
pub use distribution::{checksum_address, normalize_distribution};
pub use stats::{normalize, normalize_referral_totals, parse_amount, parse_count};
