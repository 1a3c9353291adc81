//! # Ledger Log
//!
//! Append-only entry arena with a txid index.

use super::entities::LedgerEntry;
use super::errors::LedgerError;
use shared_types::{PublicKey, TxId, TxType};
use std::collections::HashMap;

/// Entries in submission order plus `txid -> position`.
#[derive(Debug, Default)]
pub struct LedgerLog {
    entries: Vec<LedgerEntry>,
    by_txid: HashMap<TxId, usize>,
}

impl LedgerLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, txid: &TxId) -> bool {
        self.by_txid.contains_key(txid)
    }

    /// Append a new entry, assigning the next index.
    pub fn append(
        &mut self,
        txid: TxId,
        tx_type: TxType,
        payload: Vec<u8>,
        public_key: PublicKey,
    ) -> Result<u64, LedgerError> {
        if self.contains(&txid) {
            return Err(LedgerError::TransactionExists(txid));
        }
        let position = self.entries.len();
        let index = position as u64;
        self.entries.push(LedgerEntry {
            txid,
            tx_type,
            payload,
            public_key,
            index,
        });
        self.by_txid.insert(txid, position);
        Ok(index)
    }

    pub fn get(&self, txid: &TxId) -> Option<&LedgerEntry> {
        self.by_txid.get(txid).map(|&i| &self.entries[i])
    }

    pub fn get_by_index(&self, index: u64) -> Option<&LedgerEntry> {
        usize::try_from(index).ok().and_then(|i| self.entries.get(i))
    }

    pub fn len(&self) -> u64 {
        self.entries.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_gap_free() {
        let mut log = LedgerLog::new();
        for i in 0..5u8 {
            let index = log
                .append([i; 32], TxType::Mint, vec![i], PublicKey([1u8; 64]))
                .unwrap();
            assert_eq!(index, i as u64);
        }
        assert_eq!(log.len(), 5);
        for i in 0..5u64 {
            assert_eq!(log.get_by_index(i).unwrap().index, i);
        }
        assert!(log.get_by_index(5).is_none());
    }

    #[test]
    fn test_duplicate_txid_rejected() {
        let mut log = LedgerLog::new();
        log.append([1u8; 32], TxType::Mint, vec![], PublicKey([1u8; 64]))
            .unwrap();
        assert_eq!(
            log.append([1u8; 32], TxType::Transfer, vec![9], PublicKey([2u8; 64])),
            Err(LedgerError::TransactionExists([1u8; 32]))
        );
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(&[1u8; 32]).unwrap().tx_type, TxType::Mint);
    }

    #[test]
    fn test_empty_log() {
        let log = LedgerLog::new();
        assert!(log.is_empty());
        assert!(log.get(&[0u8; 32]).is_none());
    }
}
