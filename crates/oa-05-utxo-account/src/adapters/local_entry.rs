//! Local entry backed by a transaction ledger.

use crate::domain::LocalEntryError;
use crate::ports::outbound::LocalEntry;
use oa_03_transaction_ledger::TransactionLedgerApi;
use shared_types::{Address, EncodedTx, PublicKey, TxId};
use std::sync::Arc;

/// Publishes account submissions to a shared ledger.
pub struct LedgerLocalEntry<L: TransactionLedgerApi + ?Sized> {
    address: Address,
    ledger: Arc<L>,
}

impl<L: TransactionLedgerApi + ?Sized> LedgerLocalEntry<L> {
    pub fn new(address: Address, ledger: Arc<L>) -> Self {
        Self { address, ledger }
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }
}

impl<L: TransactionLedgerApi + ?Sized> LocalEntry for LedgerLocalEntry<L> {
    fn address(&self) -> Address {
        self.address
    }

    fn submit_tx(
        &self,
        caller: Address,
        tx: &EncodedTx,
        public_key: &PublicKey,
    ) -> Result<TxId, LocalEntryError> {
        self.ledger
            .submit_tx(caller, tx.tx_type, &tx.payload, public_key)
            .map_err(|e| LocalEntryError(e.to_string()))
    }
}
