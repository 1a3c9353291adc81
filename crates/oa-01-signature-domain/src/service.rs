//! # Signature Domain Service
//!
//! Application service implementing `SignatureDomainApi` over the pure
//! ECDSA and EIP-712 functions of the domain layer.

use crate::domain::ecdsa;
use crate::domain::eip712;
use crate::domain::entities::{Eip712Domain, EcdsaSignature};
use crate::domain::errors::SignatureError;
use crate::ports::inbound::SignatureDomainApi;
use shared_types::{Hash, OmniAddress, OmniverseTx, PublicKey, TxId};
use tracing::debug;

/// Signature domain bound to one EIP-712 domain.
///
/// The separator is computed once at construction.
#[derive(Clone, Debug)]
pub struct SignatureDomain {
    domain: Eip712Domain,
    separator: Hash,
}

impl SignatureDomain {
    pub fn new(domain: Eip712Domain) -> Self {
        let separator = eip712::domain_separator(&domain);
        Self { domain, separator }
    }

    /// Precomputed domain separator.
    pub fn separator(&self) -> &Hash {
        &self.separator
    }
}

impl Default for SignatureDomain {
    fn default() -> Self {
        Self::new(Eip712Domain::default())
    }
}

impl SignatureDomainApi for SignatureDomain {
    fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    fn txid(&self, tx: &OmniverseTx) -> TxId {
        eip712::compute_txid(tx)
    }

    fn signing_hash(&self, tx: &OmniverseTx) -> Hash {
        eip712::signing_digest(&self.separator, tx)
    }

    fn recover_signer(&self, tx: &OmniverseTx) -> Result<PublicKey, SignatureError> {
        let signature = EcdsaSignature::from_bytes(tx.signature())?;
        ecdsa::recover_public_key(&self.signing_hash(tx), &signature)
    }

    fn verify(&self, tx: &OmniverseTx, expected: &PublicKey) -> Result<PublicKey, SignatureError> {
        match self.recover_signer(tx) {
            Ok(recovered) if recovered == *expected => Ok(recovered),
            Ok(recovered) => {
                debug!(
                    "[oa-01] signer mismatch: expected {}, recovered {}",
                    expected.omni_address(),
                    recovered.omni_address()
                );
                Err(SignatureError::SignatureVerifyFailed)
            }
            Err(e) => {
                debug!("[oa-01] signature rejected: {}", e);
                Err(SignatureError::SignatureVerifyFailed)
            }
        }
    }

    fn assert_owner(
        &self,
        claimed: &OmniAddress,
        actual: &OmniAddress,
    ) -> Result<(), SignatureError> {
        if claimed == actual {
            Ok(())
        } else {
            Err(SignatureError::NotUtxoOwner {
                claimed: *claimed,
                actual: *actual,
            })
        }
    }
}
