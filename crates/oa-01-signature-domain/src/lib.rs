//! # Signature Domain Subsystem (OA-01)
//!
//! Canonical hashing and signer recovery for Omniverse payloads.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): secp256k1 recovery, EIP-191 and EIP-712 hashing
//! - **Ports Layer** (`ports/`): the `SignatureDomainApi` trait
//! - **Service Layer** (`service.rs`): `SignatureDomain`, bound to one EIP-712 domain
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are rejected
//! - **Stable txids**: the txid is the struct hash, so it does not change when
//!   the signature is attached

pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export public API
pub use domain::ecdsa::{
    address_from_public_key, batch_recover_addresses, keccak256, personal_message_hash,
    recover_address, recover_public_key,
};
pub use domain::eip712::{compute_txid, derive_asset_id, domain_separator, signing_digest};
pub use domain::entities::{EcdsaSignature, Eip712Domain, SIGNATURE_LENGTH};
pub use domain::errors::SignatureError;
pub use ports::inbound::SignatureDomainApi;
pub use service::SignatureDomain;
