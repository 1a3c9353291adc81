//! # Registry Errors

use shared_types::PublicKey;
use thiserror::Error;

/// Errors returned by `register`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Public key and signature arrays differ in length.
    #[error("Length mismatch: {public_keys} public keys, {signatures} signatures")]
    LengthMismatch {
        public_keys: usize,
        signatures: usize,
    },

    /// Signature `index` does not recover to the address of its public key.
    #[error("Signature verification failed at index {index}")]
    SignatureVerificationFailed { index: usize },

    /// The key is already bound to some identity, or repeated in the batch.
    #[error("Public key already registered: {0}")]
    PublicKeyAlreadyRegistered(PublicKey),
}
