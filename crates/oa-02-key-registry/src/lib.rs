//! # Key Registry Subsystem (OA-02)
//!
//! Binds secp256k1 public keys to host identities.
//!
//! ## Invariants
//!
//! - A public key is bound to at most one identity, ever.
//! - An identity's keys are kept in registration order; the list only grows.
//! - A binding requires a signature by the key holder over a challenge that
//!   names the caller and the chain id.

pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use domain::{registration_hash, registration_message, RegistryError, DEFAULT_CHAIN_ID};
pub use ports::inbound::KeyRegistryApi;
pub use service::KeyRegistry;
