//! # Key Bindings
//!
//! Identity -> ordered keys, and key -> identity. A key is bound at most once.

use super::errors::RegistryError;
use shared_types::{Address, PublicKey};
use std::collections::{HashMap, HashSet};

/// In-memory binding table. Append-only.
#[derive(Debug, Default)]
pub struct KeyBindings {
    identities: HashMap<Address, Vec<PublicKey>>,
    owners: HashMap<PublicKey, Address>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails on the first key that is already bound or repeats earlier in `keys`.
    pub fn check_unbound(&self, keys: &[PublicKey]) -> Result<(), RegistryError> {
        let mut seen = HashSet::with_capacity(keys.len());
        for key in keys {
            if self.owners.contains_key(key) || !seen.insert(*key) {
                return Err(RegistryError::PublicKeyAlreadyRegistered(*key));
            }
        }
        Ok(())
    }

    /// Append `keys` to `owner`, all or nothing.
    pub fn bind(&mut self, owner: Address, keys: &[PublicKey]) -> Result<(), RegistryError> {
        self.check_unbound(keys)?;
        let list = self.identities.entry(owner).or_default();
        for key in keys {
            list.push(*key);
            self.owners.insert(*key, owner);
        }
        Ok(())
    }

    pub fn keys_of(&self, identity: &Address) -> &[PublicKey] {
        self.identities
            .get(identity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn owner_of(&self, key: &PublicKey) -> Option<Address> {
        self.owners.get(key).copied()
    }

    pub fn key_count(&self) -> usize {
        self.owners.len()
    }
}
