//! # Outbound Ports (Driven Ports / SPI)

use crate::domain::LocalEntryError;
use shared_types::{Address, EncodedTx, PublicKey, TxId};

/// Relay store a signed transaction is published to on `submit_tx`.
pub trait LocalEntry: Send + Sync {
    /// Host address of the entry, recorded in `SystemConfig::local_entry`.
    fn address(&self) -> Address;

    /// Publish `tx` on behalf of `caller`, signed by `public_key`.
    fn submit_tx(
        &self,
        caller: Address,
        tx: &EncodedTx,
        public_key: &PublicKey,
    ) -> Result<TxId, LocalEntryError>;
}
