//! Encode and decode commands for referral codes.

use crate::codec::{decode_with_path, encode_referral_code, parse_encoded_code, DecodedCode};
use anyhow::{Context, Result};

/// Encode a referral code and return its `0x`-prefixed 32-byte hex form
pub fn execute_encode(code: &str) -> Result<String> {
    let encoded = encode_referral_code(code)
        .with_context(|| format!("Failed to encode referral code {:?}", code))?;

    Ok(encoded.to_string())
}

/// Decode a `0x`-prefixed 32-byte hex value
pub fn execute_decode(hex_code: &str) -> Result<DecodedCode> {
    let encoded = parse_encoded_code(hex_code.trim()).context("Failed to parse encoded code")?;

    Ok(decode_with_path(&encoded))
}
