//! Referral code codec.
//!
//! Referral codes live on-chain as `bytes32` values. This module maps
//! between the human-readable code and its 32-byte form.

pub mod referral_code;

// Re-export main types and functions
pub use referral_code::{
    decode_referral_code, decode_with_path, encode_referral_code, parse_encoded_code,
    DecodedCode, EncodedCode, MAX_CODE_LENGTH,
};
