//! # Inbound Ports (Driving Ports / API)

use crate::domain::{LedgerEntry, LedgerError};
use shared_types::{Address, PublicKey, TxId};

/// Identity-bound publication of signed transactions.
pub trait TransactionLedgerApi: Send + Sync {
    /// Publish a signed payload on behalf of `caller`.
    ///
    /// Check order: caller registered, key bound to caller, payload decodes,
    /// signature matches key, txid not yet stored.
    fn submit_tx(
        &self,
        caller: Address,
        tx_type: u8,
        payload: &[u8],
        public_key: &PublicKey,
    ) -> Result<TxId, LedgerError>;

    fn get_transaction(&self, txid: &TxId) -> Result<LedgerEntry, LedgerError>;

    fn get_transaction_by_index(&self, index: u64) -> Result<LedgerEntry, LedgerError>;

    /// Number of published transactions; also the next sequence index.
    fn get_transaction_number(&self) -> u64;
}
