//! # Outbound Ports (Driven Ports / SPI)

use shared_types::{Address, PublicKey};
use std::sync::Arc;

/// Read access to key bindings.
pub trait KeyDirectory: Send + Sync {
    /// Keys bound to `identity`, in registration order.
    fn keys_of(&self, identity: &Address) -> Vec<PublicKey>;

    /// Identity a key is bound to, if any.
    fn owner_of(&self, public_key: &PublicKey) -> Option<Address>;
}

impl<T: KeyDirectory + ?Sized> KeyDirectory for Arc<T> {
    fn keys_of(&self, identity: &Address) -> Vec<PublicKey> {
        (**self).keys_of(identity)
    }

    fn owner_of(&self, public_key: &PublicKey) -> Option<Address> {
        (**self).owner_of(public_key)
    }
}
