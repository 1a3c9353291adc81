//! # Concurrent Accounts
//!
//! Many accounts register on one registry and publish to one ledger from
//! parallel tasks; the ledger's sequence index must stay gap-free and txids
//! unique. A single account shared behind a `parking_lot::Mutex` must apply a
//! relayed transaction exactly once.

#[cfg(test)]
mod tests {
    use super::super::{init_tracing, Chain};
    use oa_01_signature_domain::test_utils::TestSigner;
    use oa_02_key_registry::KeyRegistryApi;
    use oa_03_transaction_ledger::TransactionLedgerApi;
    use oa_04_inclusion_oracle::LocalTrusted;
    use oa_05_utxo_account::test_utils::sign_and_submit;
    use oa_05_utxo_account::{AccountError, UtxoAccount, UtxoAccountApi};
    use parking_lot::Mutex;
    use shared_types::{AssetId, Output, TxId};
    use std::collections::HashSet;
    use std::sync::Arc;

    const TOKEN: AssetId = [0x01; 32];
    const ACCOUNTS: u64 = 8;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_accounts_share_one_ledger() -> anyhow::Result<()> {
        init_tracing();
        let chain = Arc::new(Chain::new());

        let mut handles = Vec::new();
        for i in 0..ACCOUNTS {
            let chain = Arc::clone(&chain);
            handles.push(tokio::task::spawn_blocking(
                move || -> Result<TxId, AccountError> {
                    let signer = TestSigner::from_seed(100 + i);
                    let address = [i as u8 + 1; 20];
                    let mut account = chain.open_account(address, &signer, LocalTrusted)?;
                    account.mint(
                        TOKEN,
                        vec![Output {
                            owner: signer.omni_address(),
                            amount: 10 * (u128::from(i) + 1),
                        }],
                    )?;
                    sign_and_submit(&mut account, &signer)
                },
            ));
        }

        let mut txids = HashSet::new();
        for handle in handles {
            txids.insert(handle.await??);
        }
        assert_eq!(txids.len() as u64, ACCOUNTS);
        assert_eq!(chain.ledger.get_transaction_number(), ACCOUNTS);

        for index in 0..ACCOUNTS {
            let entry = chain.ledger.get_transaction_by_index(index)?;
            assert_eq!(entry.index, index);
            assert!(txids.contains(&entry.txid));
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_shared_account_applies_relay_once() -> anyhow::Result<()> {
        let chain = Chain::new();
        let alice = TestSigner::from_seed(41);
        let bob = TestSigner::from_seed(42);

        let mut sender = chain.open_account([0xA1; 20], &alice, LocalTrusted)?;
        sender.mint(
            TOKEN,
            vec![Output {
                owner: bob.omni_address(),
                amount: 30,
            }],
        )?;
        let txid = sign_and_submit(&mut sender, &alice)?;
        let entry = chain.ledger.get_transaction(&txid)?;

        let receiver = Arc::new(Mutex::new(UtxoAccount::new(
            [0xB2; 20],
            bob.public_key(),
            Arc::clone(&chain.registry) as Arc<dyn KeyRegistryApi>,
            LocalTrusted,
        )));

        let mut handles = Vec::new();
        for _ in 0..ACCOUNTS {
            let receiver = Arc::clone(&receiver);
            let tx = entry.encoded();
            let sender_key = entry.public_key;
            handles.push(tokio::task::spawn_blocking(move || {
                receiver
                    .lock()
                    .handle_omniverse_tx(&tx, &[], &sender_key, &[])
            }));
        }

        let mut applied = 0;
        for handle in handles {
            match handle.await? {
                Ok(handled) => {
                    assert_eq!(handled, txid);
                    applied += 1;
                }
                Err(e) => assert_eq!(e, AccountError::TransactionAlreadyHandled(txid)),
            }
        }
        assert_eq!(applied, 1);
        assert_eq!(receiver.lock().balance(&TOKEN), 30);
        Ok(())
    }
}
