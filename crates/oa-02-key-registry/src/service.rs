//! # Key Registry Service
//!
//! Implements `KeyRegistryApi` with a single `RwLock` around the binding table.
//!
//! ## Flow
//!
//! 1. Length check
//! 2. Parallel signer recovery over the registration challenge (no lock held)
//! 3. Uniqueness check and insertion under one write guard

use crate::domain::{registration_hash, KeyBindings, RegistryError, DEFAULT_CHAIN_ID};
use crate::ports::inbound::KeyRegistryApi;
use oa_01_signature_domain::{address_from_public_key, batch_recover_addresses, EcdsaSignature};
use parking_lot::RwLock;
use shared_types::{address_to_hex, Address, Hash, PublicKey};
use tracing::{debug, info, warn};

/// Shared registry of key bindings for one chain id.
#[derive(Debug)]
pub struct KeyRegistry {
    chain_id: u64,
    bindings: RwLock<KeyBindings>,
}

impl KeyRegistry {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            bindings: RwLock::new(KeyBindings::new()),
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Number of bound keys across all identities.
    pub fn key_count(&self) -> usize {
        self.bindings.read().key_count()
    }

    /// Whether `public_key` is bound to `identity`.
    pub fn is_bound_to(&self, identity: &Address, public_key: &PublicKey) -> bool {
        self.bindings.read().owner_of(public_key) == Some(*identity)
    }

    fn verify_signatures(
        &self,
        caller: &Address,
        public_keys: &[PublicKey],
        signatures: &[Vec<u8>],
    ) -> Result<(), RegistryError> {
        let challenge = registration_hash(caller, self.chain_id);

        let mut requests: Vec<(Hash, EcdsaSignature)> = Vec::with_capacity(signatures.len());
        for (index, raw) in signatures.iter().enumerate() {
            let sig = EcdsaSignature::from_bytes(raw)
                .map_err(|_| RegistryError::SignatureVerificationFailed { index })?;
            requests.push((challenge, sig));
        }

        let recovered = batch_recover_addresses(&requests);
        for (index, (result, key)) in recovered.into_iter().zip(public_keys).enumerate() {
            match result {
                Ok(signer) if signer == address_from_public_key(key) => {}
                Ok(_) | Err(_) => {
                    warn!("[oa-02] registration signature {} rejected", index);
                    return Err(RegistryError::SignatureVerificationFailed { index });
                }
            }
        }
        Ok(())
    }
}

impl Default for KeyRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CHAIN_ID)
    }
}

impl KeyRegistryApi for KeyRegistry {
    fn register(
        &self,
        caller: Address,
        public_keys: &[PublicKey],
        signatures: &[Vec<u8>],
    ) -> Result<(), RegistryError> {
        if public_keys.len() != signatures.len() {
            return Err(RegistryError::LengthMismatch {
                public_keys: public_keys.len(),
                signatures: signatures.len(),
            });
        }

        self.verify_signatures(&caller, public_keys, signatures)?;

        let mut bindings = self.bindings.write();
        bindings.bind(caller, public_keys)?;
        info!(
            "[oa-02] Bound {} key(s) to {}",
            public_keys.len(),
            address_to_hex(&caller)
        );
        debug!("[oa-02] {} keys bound in total", bindings.key_count());
        Ok(())
    }

    fn get_pubkeys(&self, identity: &Address) -> Vec<PublicKey> {
        self.bindings.read().keys_of(identity).to_vec()
    }

    fn owner_of(&self, public_key: &PublicKey) -> Option<Address> {
        self.bindings.read().owner_of(public_key)
    }
}
