//! # Integration Tests
//!
//! Shared fixtures wiring real registries, ledgers and accounts together.

pub mod concurrency;
pub mod flows;

use oa_01_signature_domain::test_utils::TestSigner;
use oa_01_signature_domain::SignatureDomain;
use oa_02_key_registry::test_utils::registration_signatures;
use oa_02_key_registry::{KeyRegistry, KeyRegistryApi};
use oa_03_transaction_ledger::{RegistryLedger, TransactionLedger};
use oa_04_inclusion_oracle::InclusionPolicy;
use oa_05_utxo_account::test_utils::seed_gas_utxos;
use oa_05_utxo_account::{AccountError, LedgerLocalEntry, LocalEntry, UtxoAccount, UtxoAccountApi};
use shared_types::Address;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Host address of the shared ledger.
pub const LEDGER_ADDRESS: Address = [0xEE; 20];

/// Route `[oa-0N]` logs to the test writer, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One chain: a key registry and the ledger submissions are published to.
pub struct Chain {
    pub registry: Arc<KeyRegistry>,
    pub ledger: Arc<RegistryLedger>,
}

impl Chain {
    pub fn new() -> Self {
        let registry = Arc::new(KeyRegistry::default());
        let ledger = Arc::new(TransactionLedger::new(
            Arc::clone(&registry),
            SignatureDomain::default(),
        ));
        Self { registry, ledger }
    }

    /// An account at `address`, seeded with gas, publishing to this chain's
    /// ledger, with `signer` registered to it.
    pub fn open_account<P: InclusionPolicy>(
        &self,
        address: Address,
        signer: &TestSigner,
        policy: P,
    ) -> Result<UtxoAccount<P>, AccountError> {
        let mut account = UtxoAccount::new(
            address,
            signer.public_key(),
            Arc::clone(&self.registry) as Arc<dyn KeyRegistryApi>,
            policy,
        )
        .with_utxos(seed_gas_utxos(signer.omni_address()))?;

        let entry = LedgerLocalEntry::new(LEDGER_ADDRESS, Arc::clone(&self.ledger));
        account.set_local_entry(Arc::new(entry) as Arc<dyn LocalEntry>);

        let mut signatures =
            registration_signatures(&[signer.clone()], &address, self.registry.chain_id());
        account.register(signatures.remove(0))?;
        Ok(account)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
