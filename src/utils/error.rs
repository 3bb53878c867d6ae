//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while encoding or parsing referral codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Referral code is too long: {length} characters (max 31)")]
    CodeTooLong { length: usize },

    #[error("Referral code contains a null character")]
    NulCharacter,

    #[error("Invalid encoded referral code: {0}")]
    InvalidHex(String),
}

/// Errors raised while turning raw subgraph records into typed records
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Invalid integer in field `{field}`: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Invalid amount in field `{field}`: {value:?}")]
    InvalidAmount { field: &'static str, value: String },

    #[error("Invalid address in field `{field}`: {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("Invalid referral code: {0}")]
    InvalidCode(#[from] CodecError),
}

/// Errors that can occur while retrieving data from the indexing service
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid subgraph response: {0}")]
    InvalidResponse(String),

    #[error("Subgraph query failed: {0}")]
    QueryFailed(String),

    #[error("Malformed upstream data: {0}")]
    Malformed(#[from] NormalizeError),
}

/// Errors returned by report assembly
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unsupported chain {0}")]
    UnsupportedChain(u64),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
