//! # Payload Codec
//!
//! Canonical byte encoding for transaction payloads.
//!
//! Fixed-width little-endian integers, `u64` length prefixes, struct fields in
//! declaration order and arrays in element order. Trailing bytes are rejected
//! so that one payload has exactly one encoding.

use crate::errors::CodecError;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Upper bound on a single encoded payload.
pub const MAX_PAYLOAD_BYTES: u64 = 1 << 20;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_PAYLOAD_BYTES)
        .reject_trailing_bytes()
}

/// Encode a value into its canonical bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    options()
        .serialize(value)
        .map_err(|e| CodecError::Encoding(e.to_string()))
}

/// Decode canonical bytes, rejecting truncated or over-long input.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    options()
        .deserialize(bytes)
        .map_err(|e| CodecError::Malformed(e.to_string()))
}
