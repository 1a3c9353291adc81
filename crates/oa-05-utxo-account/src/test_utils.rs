//! Account fixtures for tests.

use crate::domain::LocalEntryError;
use crate::ports::inbound::UtxoAccountApi;
use crate::ports::outbound::LocalEntry;
use crate::service::UtxoAccount;
use oa_01_signature_domain::compute_txid;
use oa_01_signature_domain::test_utils::TestSigner;
use oa_02_key_registry::test_utils::registration_signatures;
use oa_02_key_registry::{KeyRegistry, KeyRegistryApi};
use oa_04_inclusion_oracle::InclusionPolicy;
use parking_lot::Mutex;
use shared_types::{
    Address, Amount, EncodedTx, OmniAddress, OmniverseTx, PublicKey, TxId, Utxo, GAS_ASSET_ID,
};
use std::sync::Arc;

/// Host address of the fixture account.
pub const ACCOUNT: Address = [0xAA; 20];

/// Host address of the mock local entry.
pub const LOCAL_ENTRY: Address = [0xEE; 20];

/// Ten gas UTXOs: txid `i` (32-byte big-endian), index `i`, amount `(i + 1) * 1000`.
pub fn seed_gas_utxos(owner: OmniAddress) -> Vec<Utxo> {
    (0..10u64)
        .map(|i| {
            let mut txid = [0u8; 32];
            txid[24..].copy_from_slice(&i.to_be_bytes());
            Utxo {
                txid,
                index: i,
                amount: Amount::from(i + 1) * 1000,
                owner,
                asset_id: GAS_ASSET_ID,
            }
        })
        .collect()
}

/// A recorded call to `MockLocalEntry::submit_tx`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub caller: Address,
    pub tx: EncodedTx,
    pub public_key: PublicKey,
}

/// Local entry that records submissions and can be told to fail.
#[derive(Debug, Default)]
pub struct MockLocalEntry {
    address: Address,
    submissions: Mutex<Vec<Submission>>,
    failure: Mutex<Option<String>>,
}

impl MockLocalEntry {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Default::default()
        }
    }

    /// Reject every following submission with `reason`.
    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock() = Some(reason.to_string());
    }

    /// Accept submissions again.
    pub fn succeed(&self) {
        *self.failure.lock() = None;
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().clone()
    }

    /// Most recently accepted transaction.
    pub fn last_tx(&self) -> Option<EncodedTx> {
        self.submissions.lock().last().map(|s| s.tx.clone())
    }
}

impl LocalEntry for MockLocalEntry {
    fn address(&self) -> Address {
        self.address
    }

    fn submit_tx(
        &self,
        caller: Address,
        tx: &EncodedTx,
        public_key: &PublicKey,
    ) -> Result<TxId, LocalEntryError> {
        if let Some(reason) = self.failure.lock().clone() {
            return Err(LocalEntryError(reason));
        }
        let decoded = OmniverseTx::try_from(tx).map_err(|e| LocalEntryError(e.to_string()))?;
        self.submissions.lock().push(Submission {
            caller,
            tx: tx.clone(),
            public_key: *public_key,
        });
        Ok(compute_txid(&decoded))
    }
}

/// An account at `ACCOUNT` seeded with gas UTXOs, its signer key registered
/// and a `MockLocalEntry` bound.
pub fn registered_account<P: InclusionPolicy>(
    signer: &TestSigner,
    policy: P,
) -> (UtxoAccount<P>, Arc<KeyRegistry>, Arc<MockLocalEntry>) {
    let registry = Arc::new(KeyRegistry::default());
    let entry = Arc::new(MockLocalEntry::new(LOCAL_ENTRY));

    let mut account = UtxoAccount::new(
        ACCOUNT,
        signer.public_key(),
        Arc::clone(&registry) as Arc<dyn KeyRegistryApi>,
        policy,
    )
    .with_utxos(seed_gas_utxos(signer.omni_address()))
    .expect("seed fixture");
    account.set_local_entry(Arc::clone(&entry) as Arc<dyn LocalEntry>);

    let signature = registration_signatures(&[signer.clone()], &ACCOUNT, registry.chain_id())
        .pop()
        .expect("one signature");
    account.register(signature).expect("registration fixture");

    (account, registry, entry)
}

/// Sign the pending transaction and submit it as the signer.
pub fn sign_and_submit<P: InclusionPolicy>(
    account: &mut UtxoAccount<P>,
    signer: &TestSigner,
) -> Result<TxId, crate::domain::AccountError> {
    let unsigned = account.get_unsigned_tx();
    let signature = match &unsigned.tx {
        Some(tx) => signer.sign_tx(account.signature_domain(), tx),
        None => Vec::new(),
    };
    account.submit_tx(signer.address(), unsigned.tx_index, signature)
}
