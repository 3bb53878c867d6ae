//! Encoding and decoding of `bytes32` referral codes.
//!
//! Decoding has two paths. The primary path reads the bytes up to the first
//! null as UTF-8. Values that are not valid UTF-8 (written by older or
//! foreign tooling) fall back to a byte-per-character reading so they still
//! render as text.

use crate::utils::error::CodecError;
use alloy_primitives::B256;
use log::debug;
use std::str::Utf8Error;

/// A referral code in its on-chain 32-byte, null-padded form
pub type EncodedCode = B256;

/// Longest code that still leaves room for a null terminator
pub const MAX_CODE_LENGTH: usize = 31;

/// Result of decoding, tagged with the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedCode {
    /// Null-terminated UTF-8 text
    Utf8(String),

    /// Fallback: one character per byte, trailing whitespace/nulls trimmed
    Bytewise(String),
}

impl DecodedCode {
    pub fn as_str(&self) -> &str {
        match self {
            DecodedCode::Utf8(code) | DecodedCode::Bytewise(code) => code,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            DecodedCode::Utf8(code) | DecodedCode::Bytewise(code) => code,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DecodedCode::Bytewise(_))
    }
}

/// Encode a referral code into its 32-byte form
///
/// **Public** - inverse of `decode_referral_code`
///
/// # Errors
/// * `CodecError::CodeTooLong` - more than 31 characters (or more than 31
///   bytes once UTF-8 encoded)
/// * `CodecError::NulCharacter` - the code would not survive decoding
///
/// # Example
/// ```ignore
/// let encoded = encode_referral_code("ABC")?;
/// assert_eq!(&encoded[..3], b"ABC");
/// ```
pub fn encode_referral_code(code: &str) -> Result<EncodedCode, CodecError> {
    let length = code.chars().count();
    if length > MAX_CODE_LENGTH || code.len() > MAX_CODE_LENGTH {
        return Err(CodecError::CodeTooLong { length });
    }

    if code.contains('\0') {
        return Err(CodecError::NulCharacter);
    }

    let mut bytes = [0u8; 32];
    bytes[..code.len()].copy_from_slice(code.as_bytes());

    Ok(B256::from(bytes))
}

/// Decode a 32-byte value into a referral code
///
/// **Public** - never fails; see `decode_with_path` for which path was taken
pub fn decode_referral_code(encoded: &EncodedCode) -> String {
    decode_with_path(encoded).into_string()
}

/// Decode and report which path produced the code
pub fn decode_with_path(encoded: &EncodedCode) -> DecodedCode {
    match decode_null_terminated(encoded) {
        Ok(code) => DecodedCode::Utf8(code.to_string()),
        Err(e) => {
            debug!("Referral code {} is not valid UTF-8 ({}), decoding bytewise", encoded, e);
            DecodedCode::Bytewise(decode_bytewise(encoded))
        }
    }
}

/// Parse the `0x`-prefixed hex form returned by the subgraph
pub fn parse_encoded_code(hex_code: &str) -> Result<EncodedCode, CodecError> {
    hex_code
        .parse::<B256>()
        .map_err(|e| CodecError::InvalidHex(format!("{:?}: {}", hex_code, e)))
}

/// Primary path: UTF-8 up to the first null byte
///
/// **Private** - the error is inspected by `decode_with_path`
fn decode_null_terminated(encoded: &EncodedCode) -> Result<&str, Utf8Error> {
    let bytes = encoded.as_slice();
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    std::str::from_utf8(&bytes[..end])
}

/// Fallback path: every byte (each hex pair of the textual form) becomes the
/// character with that code point
///
/// **Private** - cannot fail
fn decode_bytewise(encoded: &EncodedCode) -> String {
    let code: String = encoded.iter().map(|b| char::from(*b)).collect();
    code.trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pads_with_nulls() {
        let encoded = encode_referral_code("ABC").unwrap();

        assert_eq!(&encoded[..3], b"ABC");
        assert!(encoded[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_encode_rejects_long_code() {
        let code = "A".repeat(32);
        assert_eq!(
            encode_referral_code(&code),
            Err(CodecError::CodeTooLong { length: 32 })
        );

        assert!(encode_referral_code(&"A".repeat(31)).is_ok());
    }

    #[test]
    fn test_encode_rejects_multibyte_overflow() {
        // 16 characters but 32 bytes
        let code = "é".repeat(16);
        assert!(matches!(
            encode_referral_code(&code),
            Err(CodecError::CodeTooLong { length: 16 })
        ));
    }

    #[test]
    fn test_encode_rejects_nul() {
        assert_eq!(encode_referral_code("A\0B"), Err(CodecError::NulCharacter));
    }

    #[test]
    fn test_round_trip() {
        let longest = "Z".repeat(31);
        for code in ["", "A", "ABC", "gmx_referral", "émoji-ok", longest.as_str()] {
            let encoded = encode_referral_code(code).unwrap();
            assert_eq!(decode_with_path(&encoded), DecodedCode::Utf8(code.to_string()));
        }
    }

    #[test]
    fn test_decode_ignores_bytes_after_null() {
        let mut bytes = [0u8; 32];
        bytes[..3].copy_from_slice(b"REF");
        bytes[10..13].copy_from_slice(b"XYZ");

        assert_eq!(decode_referral_code(&B256::from(bytes)), "REF");
    }

    #[test]
    fn test_decode_without_null_terminator() {
        let bytes = [b'A'; 32];
        assert_eq!(decode_referral_code(&B256::from(bytes)), "A".repeat(32));
    }

    #[test]
    fn test_decode_falls_back_on_invalid_utf8() {
        let mut bytes = [0u8; 32];
        bytes[0] = b'A';
        bytes[1] = 0xff;
        bytes[2] = b'B';
        bytes[3] = b' ';

        let decoded = decode_with_path(&B256::from(bytes));

        assert!(decoded.is_fallback());
        assert_eq!(decoded.as_str(), "A\u{ff}B");
    }

    #[test]
    fn test_decode_fallback_keeps_bytes_after_null() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xc3; // truncated multibyte sequence
        bytes[2] = b'Q';

        assert_eq!(decode_referral_code(&B256::from(bytes)), "\u{c3}\0Q");
    }

    #[test]
    fn test_decode_arbitrary_values_never_panics() {
        for seed in 0u8..=255 {
            let bytes: [u8; 32] = std::array::from_fn(|i| seed.wrapping_mul(31).wrapping_add(i as u8 * 7));
            let _ = decode_referral_code(&B256::from(bytes));
        }
        assert_eq!(decode_referral_code(&B256::ZERO), "");
    }

    #[test]
    fn test_parse_encoded_code() {
        let encoded = encode_referral_code("ABC").unwrap();
        let hex = encoded.to_string();

        assert!(hex.starts_with("0x414243"));
        assert_eq!(parse_encoded_code(&hex), Ok(encoded));
        assert!(matches!(parse_encoded_code("0x4142"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(parse_encoded_code("not hex"), Err(CodecError::InvalidHex(_))));
    }
}
