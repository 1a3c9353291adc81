//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::Eip712Domain;
use crate::domain::errors::SignatureError;
use shared_types::{Hash, OmniAddress, OmniverseTx, PublicKey, TxId};

/// Canonical hashing and signer checks for Omniverse payloads.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SignatureDomainApi: Send + Sync {
    /// The typed-data domain signatures are bound to.
    fn domain(&self) -> &Eip712Domain;

    /// Canonical txid of a payload (independent of its signature).
    fn txid(&self, tx: &OmniverseTx) -> TxId;

    /// Digest the holder of the sending key signs.
    fn signing_hash(&self, tx: &OmniverseTx) -> Hash;

    /// Recover the signer of `tx` from its embedded signature.
    fn recover_signer(&self, tx: &OmniverseTx) -> Result<PublicKey, SignatureError>;

    /// Check that `tx` is signed by `expected` and return the recovered key.
    ///
    /// # Errors
    /// `SignatureVerifyFailed` for malformed or non-matching signatures.
    fn verify(&self, tx: &OmniverseTx, expected: &PublicKey) -> Result<PublicKey, SignatureError>;

    /// Fail with `NotUtxoOwner` when a referenced UTXO belongs to someone else.
    fn assert_owner(&self, claimed: &OmniAddress, actual: &OmniAddress)
        -> Result<(), SignatureError>;
}
