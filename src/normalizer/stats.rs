//! Period stat normalization.

use crate::codec::{decode_referral_code, parse_encoded_code};
use crate::report::schema::{PeriodStat, ReferralTotalStats};
use crate::subgraph::types::{RawPeriodStat, RawReferralStat};
use crate::utils::error::NormalizeError;
use alloy_primitives::U256;

/// Convert a raw period stat into its typed form
///
/// **Public** - main entry point for stat normalization
///
/// Monetary and volume fields are parsed straight into `U256` from their
/// decimal text; no float is involved at any point.
///
/// # Errors
/// * `NormalizeError::InvalidInteger` / `InvalidAmount` - non-decimal text
/// * `NormalizeError::InvalidCode` - referral code is not 32 bytes of hex
pub fn normalize(raw: &RawPeriodStat) -> Result<PeriodStat, NormalizeError> {
    let encoded = parse_encoded_code(&raw.referral_code)?;

    Ok(PeriodStat {
        volume: parse_amount("volume", &raw.volume)?,
        trades: parse_count("trades", &raw.trades)?,
        traded_referrals_count: parse_count("tradedReferralsCount", &raw.traded_referrals_count)?,
        total_rebate_usd: parse_amount("totalRebateUsd", &raw.total_rebate_usd)?,
        discount_usd: parse_amount("discountUsd", &raw.discount_usd)?,
        referral_code: decode_referral_code(&encoded),
    })
}

/// Normalize the referred-trader totals, substituting zeros when absent
pub fn normalize_referral_totals(
    raw: Option<&RawReferralStat>,
) -> Result<ReferralTotalStats, NormalizeError> {
    match raw {
        Some(raw) => Ok(ReferralTotalStats {
            volume: parse_amount("volume", &raw.volume)?,
            discount_usd: parse_amount("discountUsd", &raw.discount_usd)?,
        }),
        None => Ok(ReferralTotalStats::default()),
    }
}

/// Parse a base-10 count
pub fn parse_count(field: &'static str, value: &str) -> Result<u64, NormalizeError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| NormalizeError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

/// Parse a base-10 amount of arbitrary size (up to 2^256 - 1)
pub fn parse_amount(field: &'static str, value: &str) -> Result<U256, NormalizeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NormalizeError::InvalidAmount {
            field,
            value: value.to_string(),
        });
    }

    U256::from_str_radix(trimmed, 10).map_err(|_| NormalizeError::InvalidAmount {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_referral_code;
    use pretty_assertions::assert_eq;

    fn raw_stat(referral_code: String) -> RawPeriodStat {
        RawPeriodStat {
            referral_code,
            volume: "1000000000000000000".to_string(),
            trades: "5".to_string(),
            traded_referrals_count: "2".to_string(),
            total_rebate_usd: "500".to_string(),
            discount_usd: "0".to_string(),
        }
    }

    #[test]
    fn test_normalize_period_stat() {
        let raw = raw_stat(encode_referral_code("REF1").unwrap().to_string());

        assert_eq!(
            normalize(&raw).unwrap(),
            PeriodStat {
                volume: U256::from(1_000_000_000_000_000_000u64),
                trades: 5,
                traded_referrals_count: 2,
                total_rebate_usd: U256::from(500u64),
                discount_usd: U256::ZERO,
                referral_code: "REF1".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_keeps_precision_beyond_u64() {
        let mut raw = raw_stat(encode_referral_code("BIG").unwrap().to_string());
        // 10^30 + 1, far past f64 safe integers
        raw.volume = "1000000000000000000000000000001".to_string();

        let stat = normalize(&raw).unwrap();
        let expected = U256::from(10u64).pow(U256::from(30u64)) + U256::from(1u64);

        assert_eq!(stat.volume, expected);
        assert_eq!(stat.volume.to_string(), "1000000000000000000000000000001");
    }

    #[test]
    fn test_normalize_rejects_bad_code() {
        let raw = raw_stat("0x1234".to_string());
        assert!(matches!(normalize(&raw), Err(NormalizeError::InvalidCode(_))));
    }

    #[test]
    fn test_parse_amount_rejects_non_decimal() {
        assert!(parse_amount("volume", "").is_err());
        assert!(parse_amount("volume", "1.5").is_err());
        assert!(parse_amount("volume", "-3").is_err());
        assert!(parse_amount("volume", "0x10").is_err());
        assert_eq!(parse_amount("volume", "42").unwrap(), U256::from(42u64));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("trades", "17").unwrap(), 17);
        assert!(matches!(
            parse_count("trades", "seven"),
            Err(NormalizeError::InvalidInteger { field: "trades", .. })
        ));
    }

    #[test]
    fn test_referral_totals_default_to_zero() {
        assert_eq!(normalize_referral_totals(None).unwrap(), ReferralTotalStats::default());

        let raw = RawReferralStat {
            volume: "250".to_string(),
            discount_usd: "12".to_string(),
        };
        let totals = normalize_referral_totals(Some(&raw)).unwrap();
        assert_eq!(totals.volume, U256::from(250u64));
        assert_eq!(totals.discount_usd, U256::from(12u64));
    }
}
