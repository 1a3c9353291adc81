//! Pending transaction slot.

use shared_types::{AssetId, OmniverseTx, TxId, ZERO_TXID};

/// Lifecycle of the pending slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountState {
    /// No transaction waiting for a signature.
    Idle,
    /// One constructed transaction waiting for `submit_tx`.
    AwaitingSubmission,
}

/// The single constructed, not yet submitted transaction of an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTx {
    pub tx_index: u64,
    pub txid: TxId,
    /// Unsigned payload.
    pub tx: OmniverseTx,
    /// Fee asset in force when the payload was built; its fee inputs are
    /// held under it.
    pub fee_asset: AssetId,
}

/// What `get_unsigned_tx` reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsignedTx {
    pub tx_index: u64,
    pub txid: TxId,
    pub tx: Option<OmniverseTx>,
}

impl UnsignedTx {
    /// Reported when nothing is pending.
    pub fn empty() -> Self {
        Self {
            tx_index: 0,
            txid: ZERO_TXID,
            tx: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tx.is_none()
    }
}

impl From<&PendingTx> for UnsignedTx {
    fn from(pending: &PendingTx) -> Self {
        Self {
            tx_index: pending.tx_index,
            txid: pending.txid,
            tx: Some(pending.tx.clone()),
        }
    }
}
