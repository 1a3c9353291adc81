//! # Error Types
//!
//! Errors raised while decoding wire payloads.

use thiserror::Error;

/// Errors produced by the payload codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The transaction tag is not one of Deploy (0), Mint (1), Transfer (2).
    #[error("Unknown transaction type: {0}")]
    UnknownTxType(u8),

    /// The payload bytes do not decode into the tagged structure.
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// The structure could not be encoded (exceeds the size limit).
    #[error("Encoding failed: {0}")]
    Encoding(String),
}
