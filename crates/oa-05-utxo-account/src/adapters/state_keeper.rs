//! # Ledger State Keeper
//!
//! Inclusion oracle over a transaction ledger. The proof context is the
//! ledger sequence index of the transaction, as one 32-byte big-endian word;
//! a txid is included when the entry at that index carries it.

use oa_03_transaction_ledger::TransactionLedgerApi;
use oa_04_inclusion_oracle::{decode_proof_word, InclusionOracle};
use shared_types::{Address, TxId};
use std::sync::Arc;
use tracing::debug;

pub struct LedgerStateKeeper<L: TransactionLedgerApi + ?Sized> {
    address: Address,
    ledger: Arc<L>,
}

impl<L: TransactionLedgerApi + ?Sized> LedgerStateKeeper<L> {
    pub fn new(address: Address, ledger: Arc<L>) -> Self {
        Self { address, ledger }
    }
}

impl<L: TransactionLedgerApi + ?Sized> InclusionOracle for LedgerStateKeeper<L> {
    fn address(&self) -> Address {
        self.address
    }

    fn is_included(&self, txid: &TxId, custom_data: &[u8]) -> bool {
        let Some(word) = decode_proof_word(custom_data) else {
            debug!("[oa-05] Proof context is not a single word");
            return false;
        };
        if word.bits() > 64 {
            return false;
        }
        match self.ledger.get_transaction_by_index(word.low_u64()) {
            Ok(entry) => entry.txid == *txid,
            Err(_) => false,
        }
    }
}
