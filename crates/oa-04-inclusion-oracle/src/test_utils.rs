//! Mock state keeper.

use crate::ports::outbound::InclusionOracle;
use parking_lot::RwLock;
use shared_types::{Address, TxId};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// State keeper that reports exactly the txids it was told about.
#[derive(Debug, Default)]
pub struct MockStateKeeper {
    address: Address,
    included: RwLock<HashSet<TxId>>,
    queries: AtomicUsize,
}

impl MockStateKeeper {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Default::default()
        }
    }

    /// Mark `txid` as finalized.
    pub fn include(&self, txid: TxId) {
        self.included.write().insert(txid);
    }

    /// Number of `is_included` calls seen.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl InclusionOracle for MockStateKeeper {
    fn address(&self) -> Address {
        self.address
    }

    fn is_included(&self, txid: &TxId, _custom_data: &[u8]) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.included.read().contains(txid)
    }
}
