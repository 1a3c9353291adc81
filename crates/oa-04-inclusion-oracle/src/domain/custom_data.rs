//! # Proof Context
//!
//! `customData` accompanying an inbound transaction. Its reference encoding is
//! a single ABI `uint256` word (32 bytes, big-endian), typically the origin
//! chain's block or epoch the transaction was finalized in.

use primitive_types::U256;

/// ABI-encode `value` as one 32-byte word.
pub fn encode_proof_word(value: impl Into<U256>) -> Vec<u8> {
    let mut word = [0u8; 32];
    value.into().to_big_endian(&mut word);
    word.to_vec()
}

/// Decode a 32-byte word. Any other length yields `None`.
pub fn decode_proof_word(custom_data: &[u8]) -> Option<U256> {
    (custom_data.len() == 32).then(|| U256::from_big_endian(custom_data))
}
