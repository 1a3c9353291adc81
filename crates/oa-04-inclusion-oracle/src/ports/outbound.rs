//! # Outbound Ports (Driven Ports / SPI)

use shared_types::{Address, TxId};

/// External state keeper attesting that a txid was finalized elsewhere.
///
/// Must answer synchronously with a definite boolean; retries after a proof
/// becomes available are the caller's concern.
pub trait InclusionOracle: Send + Sync {
    /// Host address of the state keeper.
    fn address(&self) -> Address;

    fn is_included(&self, txid: &TxId, custom_data: &[u8]) -> bool;
}
