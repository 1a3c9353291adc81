//! Key directory backed by the shared `KeyRegistry`.

use crate::ports::outbound::KeyDirectory;
use oa_02_key_registry::{KeyRegistry, KeyRegistryApi};
use shared_types::{Address, PublicKey};

impl KeyDirectory for KeyRegistry {
    fn keys_of(&self, identity: &Address) -> Vec<PublicKey> {
        self.get_pubkeys(identity)
    }

    fn owner_of(&self, public_key: &PublicKey) -> Option<Address> {
        KeyRegistryApi::owner_of(self, public_key)
    }
}
