//! # Transaction Ledger Service
//!
//! Implements `TransactionLedgerApi`.
//!
//! Identity, decode and signature checks run without the log lock; the
//! duplicate check and the append share one `Mutex` guard so txids stay unique
//! and indices gap-free under concurrent submitters.

use crate::domain::{LedgerEntry, LedgerError, LedgerLog};
use crate::ports::inbound::TransactionLedgerApi;
use crate::ports::outbound::KeyDirectory;
use oa_01_signature_domain::{SignatureDomain, SignatureDomainApi};
use oa_02_key_registry::KeyRegistry;
use parking_lot::Mutex;
use shared_types::{address_to_hex, Address, OmniverseTx, PublicKey, TxId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ledger wired to the shared key registry.
pub type RegistryLedger = TransactionLedger<Arc<KeyRegistry>>;

/// Append-only relay store of signed transactions.
pub struct TransactionLedger<K: KeyDirectory> {
    keys: K,
    domain: SignatureDomain,
    log: Mutex<LedgerLog>,
}

impl<K: KeyDirectory> TransactionLedger<K> {
    pub fn new(keys: K, domain: SignatureDomain) -> Self {
        Self {
            keys,
            domain,
            log: Mutex::new(LedgerLog::new()),
        }
    }

    /// Signature domain payloads are verified against.
    pub fn signature_domain(&self) -> &SignatureDomain {
        &self.domain
    }

    pub fn contains(&self, txid: &TxId) -> bool {
        self.log.lock().contains(txid)
    }

    fn check_caller(&self, caller: &Address, public_key: &PublicKey) -> Result<(), LedgerError> {
        let keys = self.keys.keys_of(caller);
        if keys.is_empty() {
            return Err(LedgerError::SenderNotRegistered);
        }
        if !keys.contains(public_key) {
            return Err(LedgerError::PublicKeyNotBoundToAAContract {
                public_key: *public_key,
                owner: self.keys.owner_of(public_key),
            });
        }
        Ok(())
    }
}

impl<K: KeyDirectory> TransactionLedgerApi for TransactionLedger<K> {
    fn submit_tx(
        &self,
        caller: Address,
        tx_type: u8,
        payload: &[u8],
        public_key: &PublicKey,
    ) -> Result<TxId, LedgerError> {
        if let Err(e) = self.check_caller(&caller, public_key) {
            warn!("[oa-03] Submission from {} rejected: {}", address_to_hex(&caller), e);
            return Err(e);
        }

        let tx = OmniverseTx::decode(tx_type, payload)?;
        self.domain.verify(&tx, public_key)?;
        let txid = self.domain.txid(&tx);

        let mut log = self.log.lock();
        let index = log.append(txid, tx.tx_type(), payload.to_vec(), *public_key)?;
        info!(
            "[oa-03] Published {:?} tx 0x{} at index {}",
            tx.tx_type(),
            hex::encode(&txid[..8]),
            index
        );
        debug!("[oa-03] Ledger now holds {} transactions", log.len());
        Ok(txid)
    }

    fn get_transaction(&self, txid: &TxId) -> Result<LedgerEntry, LedgerError> {
        self.log
            .lock()
            .get(txid)
            .cloned()
            .ok_or(LedgerError::TransactionNotExists)
    }

    fn get_transaction_by_index(&self, index: u64) -> Result<LedgerEntry, LedgerError> {
        self.log
            .lock()
            .get_by_index(index)
            .cloned()
            .ok_or(LedgerError::TransactionNotExists)
    }

    fn get_transaction_number(&self) -> u64 {
        self.log.lock().len()
    }
}
