//! # Inbound Ports (Driving Ports / API)

use crate::domain::errors::RegistryError;
use shared_types::{Address, PublicKey};

/// Public key registry API.
///
/// Implementations must serialize writers so that a key is bound at most once.
pub trait KeyRegistryApi: Send + Sync {
    /// Bind `public_keys[i]` to `caller`, authorized by `signatures[i]`.
    ///
    /// Each signature is an EIP-191 signature by the holder of `public_keys[i]`
    /// over the registration message naming `caller`.
    fn register(
        &self,
        caller: Address,
        public_keys: &[PublicKey],
        signatures: &[Vec<u8>],
    ) -> Result<(), RegistryError>;

    /// Keys bound to `identity` in registration order. Empty if none.
    fn get_pubkeys(&self, identity: &Address) -> Vec<PublicKey>;

    /// Identity a key is bound to, if any.
    fn owner_of(&self, public_key: &PublicKey) -> Option<Address>;
}
