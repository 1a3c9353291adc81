//! # Registration Challenge
//!
//! The message a key holder signs to authorize binding their key to a caller.

use oa_01_signature_domain::personal_message_hash;
use shared_types::{address_to_hex, Address, Hash};

/// Chain id of the reference local deployment.
pub const DEFAULT_CHAIN_ID: u64 = 31337;

const CHALLENGE_PREFIX: &str = "Register to Omniverse AA: ";
const CHALLENGE_CHAIN_ID: &str = ", chain id: ";

/// `"Register to Omniverse AA: 0x<lowercase caller>, chain id: <chain_id>"`
pub fn registration_message(caller: &Address, chain_id: u64) -> String {
    format!(
        "{CHALLENGE_PREFIX}{}{CHALLENGE_CHAIN_ID}{chain_id}",
        address_to_hex(caller)
    )
}

/// EIP-191 hash of the registration message.
pub fn registration_hash(caller: &Address, chain_id: u64) -> Hash {
    personal_message_hash(registration_message(caller, chain_id).as_bytes())
}
