//! Distribution event normalization.

use crate::report::schema::{DistributionEvent, DistributionType};
use crate::subgraph::types::RawDistribution;
use crate::utils::config::{DISTRIBUTION_TYPE_DISCOUNT, DISTRIBUTION_TYPE_REBATES};
use crate::utils::error::NormalizeError;
use alloy_primitives::Address;
use log::warn;

use super::stats::parse_amount;

/// Convert a raw distribution into a typed event
///
/// Type `"1"` is a rebate. Every other discriminator is classified as a
/// discount, including values outside the two known ones.
pub fn normalize_distribution(raw: &RawDistribution) -> Result<DistributionEvent, NormalizeError> {
    let timestamp = raw
        .timestamp
        .trim()
        .parse::<i64>()
        .map_err(|_| NormalizeError::InvalidInteger {
            field: "timestamp",
            value: raw.timestamp.clone(),
        })?;

    Ok(DistributionEvent {
        timestamp,
        transaction_hash: raw.transaction_hash.clone(),
        receiver: checksum_address("receiver", &raw.receiver)?,
        amount: parse_amount("amount", &raw.amount)?,
        distribution_type: classify_distribution(&raw.type_id),
        token: checksum_address("token", &raw.token)?,
    })
}

/// Map a type discriminator to a bucket
///
/// **Private** - unknown discriminators fall into the discount bucket
fn classify_distribution(type_id: &str) -> DistributionType {
    if type_id == DISTRIBUTION_TYPE_REBATES {
        DistributionType::Rebate
    } else {
        if type_id != DISTRIBUTION_TYPE_DISCOUNT {
            warn!("Unknown distribution type {:?}, treating as discount", type_id);
        }
        DistributionType::Discount
    }
}

/// Parse an address in any case; output renders as EIP-55
///
/// A mixed-case input must carry a valid checksum.
pub fn checksum_address(field: &'static str, value: &str) -> Result<Address, NormalizeError> {
    let invalid = || NormalizeError::InvalidAddress {
        field,
        value: value.to_string(),
    };

    let hex = value.strip_prefix("0x").ok_or_else(invalid)?;
    let mixed_case = hex.chars().any(|c| c.is_ascii_lowercase())
        && hex.chars().any(|c| c.is_ascii_uppercase());

    if mixed_case {
        Address::parse_checksummed(value, None).map_err(|_| invalid())
    } else {
        value.parse::<Address>().map_err(|_| invalid())
    }
}
