//! # Signature Errors
//!
//! Error types for signature recovery and typed-payload verification.

use shared_types::OmniAddress;
use thiserror::Error;

/// Errors that can occur while recovering or checking a signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature is not 65 bytes, or r/s are out of range.
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The signature is malformed or recovers to a key other than the expected one.
    #[error("Signature verification failed")]
    SignatureVerifyFailed,

    /// A referenced UTXO is owned by someone other than the signer.
    #[error("Not UTXO owner: signer {claimed}, owner {actual}")]
    NotUtxoOwner {
        claimed: OmniAddress,
        actual: OmniAddress,
    },
}
