//! # Omniverse AA Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | oa-01 Signature Domain | EIP-712 txid, signer recovery (single and batch) |
//! | oa-05 UTXO Account | payload construction over a large UTXO set |
//! | oa-03 Transaction Ledger | verified submission |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use oa_01_signature_domain::test_utils::TestSigner;
use oa_01_signature_domain::{
    batch_recover_addresses, compute_txid, EcdsaSignature, SignatureDomain, SignatureDomainApi,
};
use oa_03_transaction_ledger::test_utils::registered_ledger;
use oa_03_transaction_ledger::TransactionLedgerApi;
use oa_05_utxo_account::domain::TxBuilder;
use oa_05_utxo_account::{SystemConfig, UtxoSet};
use shared_types::{Hash, Mint, OmniAddress, OmniverseTx, Output, Utxo, GAS_ASSET_ID};
use std::time::Duration;

fn mint(owner: OmniAddress, outputs: usize, salt: u128) -> OmniverseTx {
    OmniverseTx::Mint(Mint {
        asset_id: [0x42; 32],
        signature: Vec::new(),
        outputs: (0..outputs)
            .map(|i| Output {
                owner,
                amount: salt + i as u128,
            })
            .collect(),
        fee_inputs: Vec::new(),
        fee_outputs: Vec::new(),
    })
}

// ============================================================================
// OA-01: Signature Domain
// ============================================================================

fn bench_signature_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("oa-01-signature-domain");
    group.measurement_time(Duration::from_secs(5));

    let domain = SignatureDomain::default();
    let signer = TestSigner::from_seed(1);

    for outputs in [1usize, 8, 32] {
        let tx = mint(signer.omni_address(), outputs, 1);
        group.bench_with_input(BenchmarkId::new("txid", outputs), &tx, |b, tx| {
            b.iter(|| black_box(compute_txid(tx)))
        });
    }

    let signed = signer.signed(&domain, mint(signer.omni_address(), 2, 1));
    group.bench_function("recover_signer", |b| {
        b.iter(|| black_box(domain.recover_signer(&signed).is_ok()))
    });

    for size in [16usize, 128] {
        let requests: Vec<(Hash, EcdsaSignature)> = (0..size)
            .map(|i| {
                let hash = domain.signing_hash(&mint(signer.omni_address(), 1, i as u128));
                (hash, signer.sign_hash(&hash))
            })
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("batch_recover", size),
            &requests,
            |b, requests| b.iter(|| black_box(batch_recover_addresses(requests))),
        );
    }

    group.finish();
}

// ============================================================================
// OA-05: Construction
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("oa-05-construction");
    let owner = OmniAddress([0x0A; 32]);
    let config = SystemConfig::default();

    for size in [100u64, 10_000] {
        let mut set = UtxoSet::new();
        for i in 0..size {
            let mut txid = [0u8; 32];
            txid[24..].copy_from_slice(&i.to_be_bytes());
            set.insert(Utxo {
                txid,
                index: i,
                amount: 5,
                owner,
                asset_id: GAS_ASSET_ID,
            });
        }
        group.bench_with_input(BenchmarkId::new("gas_transfer", size), &set, |b, set| {
            let builder = TxBuilder::new(set, &config, owner);
            b.iter(|| {
                black_box(builder.transfer(
                    GAS_ASSET_ID,
                    vec![Output {
                        owner: OmniAddress([0x0B; 32]),
                        amount: 20,
                    }],
                ))
            })
        });
    }

    group.finish();
}

// ============================================================================
// OA-03: Ledger
// ============================================================================

fn bench_ledger_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("oa-03-transaction-ledger");
    let caller = [0x11; 20];
    let signer = TestSigner::from_seed(7);
    let (ledger, _registry) = registered_ledger(caller, &[signer.clone()]);

    let mut salt = 0u128;
    group.bench_function("submit_tx", |b| {
        b.iter(|| {
            salt += 1;
            let tx = signer.signed(ledger.signature_domain(), mint(signer.omni_address(), 1, salt));
            let encoded = tx.encode().expect("encodable");
            black_box(ledger.submit_tx(caller, encoded.tx_type, &encoded.payload, &signer.public_key()))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_signature_domain,
    bench_construction,
    bench_ledger_submit
);
criterion_main!(benches);
