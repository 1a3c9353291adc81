//! Ledger fixtures for tests.

use crate::service::{RegistryLedger, TransactionLedger};
use oa_01_signature_domain::test_utils::TestSigner;
use oa_01_signature_domain::SignatureDomain;
use oa_02_key_registry::test_utils::registration_signatures;
use oa_02_key_registry::{KeyRegistry, KeyRegistryApi};
use shared_types::{Address, Amount, Mint, OmniverseTx, Output};
use std::sync::Arc;

/// A ledger over a fresh registry where `signers` are bound to `caller`.
pub fn registered_ledger(
    caller: Address,
    signers: &[TestSigner],
) -> (RegistryLedger, Arc<KeyRegistry>) {
    let registry = Arc::new(KeyRegistry::default());
    let keys: Vec<_> = signers.iter().map(|s| s.public_key()).collect();
    let sigs = registration_signatures(signers, &caller, registry.chain_id());
    registry
        .register(caller, &keys, &sigs)
        .expect("registration fixture");
    let ledger = TransactionLedger::new(Arc::clone(&registry), SignatureDomain::default());
    (ledger, registry)
}

/// Unsigned mint of `amount` to `signer`, without fee I/O.
pub fn sample_mint(signer: &TestSigner, amount: Amount) -> OmniverseTx {
    OmniverseTx::Mint(Mint {
        asset_id: [0x42; 32],
        signature: Vec::new(),
        outputs: vec![Output {
            owner: signer.omni_address(),
            amount,
        }],
        fee_inputs: Vec::new(),
        fee_outputs: Vec::new(),
    })
}
