//! # End-to-End Flows
//!
//! Accounts, registry, ledger and inclusion oracle wired together without mocks.
//!
//! ## Flows Tested:
//!
//! 1. **Register → construct → sign → submit**: the signed payload lands in the
//!    ledger under the account's txid and the account's UTXOs move.
//! 2. **Relay on one chain**: a second account applies the ledger entry under
//!    `LocalTrusted` and spends what it received.
//! 3. **Relay across chains**: the destination account applies the entry only
//!    once a `LedgerStateKeeper` over the origin ledger attests it.

#[cfg(test)]
mod tests {
    use super::super::{init_tracing, Chain, LEDGER_ADDRESS};
    use oa_01_signature_domain::test_utils::TestSigner;
    use oa_02_key_registry::{KeyRegistry, KeyRegistryApi, RegistryError};
    use oa_03_transaction_ledger::TransactionLedgerApi;
    use oa_04_inclusion_oracle::{encode_proof_word, BeaconProof, InclusionOracle, LocalTrusted};
    use oa_05_utxo_account::test_utils::{seed_gas_utxos, sign_and_submit};
    use oa_05_utxo_account::{
        AccountError, AccountState, LedgerLocalEntry, LedgerStateKeeper, LocalEntry, UtxoAccount,
        UtxoAccountApi,
    };
    use shared_types::{Address, Amount, AssetId, OmniAddress, Output, GAS_ASSET_ID};
    use std::sync::Arc;

    const TOKEN: AssetId = [0x01; 32];
    const ALICE: Address = [0xA1; 20];
    const BOB: Address = [0xB2; 20];

    fn pay(owner: OmniAddress, amount: Amount) -> Vec<Output> {
        vec![Output { owner, amount }]
    }

    // =============================================================================
    // REGISTRATION
    // =============================================================================

    #[test]
    fn test_register_two_keys_without_signatures() {
        let registry = KeyRegistry::default();
        let keys = [
            TestSigner::from_seed(1).public_key(),
            TestSigner::from_seed(2).public_key(),
        ];

        assert_eq!(
            registry.register(ALICE, &keys, &[]),
            Err(RegistryError::LengthMismatch {
                public_keys: 2,
                signatures: 0
            })
        );
        assert!(registry.get_pubkeys(&ALICE).is_empty());
    }

    #[test]
    fn test_key_cannot_move_to_second_account() -> anyhow::Result<()> {
        let chain = Chain::new();
        let signer = TestSigner::from_seed(3);
        chain.open_account(ALICE, &signer, LocalTrusted)?;

        let second = chain.open_account(BOB, &signer, LocalTrusted);
        assert!(matches!(
            second,
            Err(AccountError::Registration(
                RegistryError::PublicKeyAlreadyRegistered(_)
            ))
        ));
        assert_eq!(chain.registry.owner_of(&signer.public_key()), Some(ALICE));
        Ok(())
    }

    // =============================================================================
    // SUBMISSION THROUGH THE LEDGER
    // =============================================================================

    #[test]
    fn test_mint_is_published_to_ledger() -> anyhow::Result<()> {
        init_tracing();
        let chain = Chain::new();
        let alice = TestSigner::from_seed(11);
        let mut account = chain.open_account(ALICE, &alice, LocalTrusted)?;

        let outputs = vec![
            Output {
                owner: alice.omni_address(),
                amount: 10
            };
            2
        ];
        let txid = account.mint(TOKEN, outputs)?;
        assert_eq!(sign_and_submit(&mut account, &alice)?, txid);

        assert_eq!(chain.ledger.get_transaction_number(), 1);
        let entry = chain.ledger.get_transaction(&txid)?;
        assert_eq!(entry.index, 0);
        assert_eq!(entry.public_key, alice.public_key());

        assert_eq!(account.get_utxos(&TOKEN).len(), 2);
        assert_eq!(account.get_unsigned_tx().txid, [0u8; 32]);
        assert_eq!(account.state(), AccountState::Idle);
        Ok(())
    }

    #[test]
    fn test_ledger_rejection_keeps_pending() -> anyhow::Result<()> {
        let home = Chain::new();
        let elsewhere = Chain::new();
        let alice = TestSigner::from_seed(12);

        // registered on `home`, publishing to a ledger that never saw the key
        let mut account = home.open_account(ALICE, &alice, LocalTrusted)?;
        let foreign = LedgerLocalEntry::new(LEDGER_ADDRESS, Arc::clone(&elsewhere.ledger));
        account.set_local_entry(Arc::new(foreign) as Arc<dyn LocalEntry>);

        let txid = account.mint(TOKEN, pay(alice.omni_address(), 10))?;
        let gas_before = account.get_utxos(&GAS_ASSET_ID);

        assert_eq!(
            sign_and_submit(&mut account, &alice),
            Err(AccountError::SubmitToLocalEntryFailed(
                "Sender not registered".to_string()
            ))
        );
        assert_eq!(account.get_unsigned_tx().txid, txid);
        assert_eq!(account.get_utxos(&GAS_ASSET_ID), gas_before);
        assert_eq!(elsewhere.ledger.get_transaction_number(), 0);
        Ok(())
    }

    #[test]
    fn test_bad_signature_is_rejected_by_ledger() -> anyhow::Result<()> {
        let chain = Chain::new();
        let alice = TestSigner::from_seed(13);
        let mut account = chain.open_account(ALICE, &alice, LocalTrusted)?;
        account.mint(TOKEN, pay(alice.omni_address(), 10))?;

        let unsigned = account.get_unsigned_tx();
        let result = account.submit_tx(alice.address(), unsigned.tx_index, vec![0u8; 65]);
        assert!(matches!(
            result,
            Err(AccountError::SubmitToLocalEntryFailed(_))
        ));
        assert_eq!(account.state(), AccountState::AwaitingSubmission);
        Ok(())
    }

    // =============================================================================
    // RELAY ON ONE CHAIN
    // =============================================================================

    #[test]
    fn test_transfer_round_trip_between_accounts() -> anyhow::Result<()> {
        init_tracing();
        let chain = Chain::new();
        let alice = TestSigner::from_seed(21);
        let bob = TestSigner::from_seed(22);
        let mut a = chain.open_account(ALICE, &alice, LocalTrusted)?;
        let mut b = chain.open_account(BOB, &bob, LocalTrusted)?;

        a.mint(TOKEN, pay(alice.omni_address(), 100))?;
        sign_and_submit(&mut a, &alice)?;
        a.transfer(TOKEN, pay(bob.omni_address(), 40))?;
        let to_bob = sign_and_submit(&mut a, &alice)?;
        assert_eq!(a.balance(&TOKEN), 60);

        let entry = chain.ledger.get_transaction_by_index(1)?;
        assert_eq!(entry.txid, to_bob);
        b.handle_omniverse_tx(&entry.encoded(), &[], &entry.public_key, &[])?;
        assert_eq!(b.balance(&TOKEN), 40);

        b.transfer(TOKEN, pay(alice.omni_address(), 15))?;
        sign_and_submit(&mut b, &bob)?;
        assert_eq!(b.balance(&TOKEN), 25);

        let entry = chain.ledger.get_transaction_by_index(2)?;
        a.handle_omniverse_tx(&entry.encoded(), &[], &entry.public_key, &[])?;
        assert_eq!(a.balance(&TOKEN), 75);

        // a's own transfer was committed on submit
        let own = chain.ledger.get_transaction_by_index(1)?;
        assert_eq!(
            a.handle_omniverse_tx(&own.encoded(), &[], &own.public_key, &[]),
            Err(AccountError::TransactionAlreadyHandled(to_bob))
        );

        assert_eq!(chain.ledger.get_transaction_number(), 3);
        for account in [&a, &b] {
            for asset in [TOKEN, GAS_ASSET_ID] {
                let sum: Amount = account.get_utxos(&asset).iter().map(|u| u.amount).sum();
                assert_eq!(sum, account.balance(&asset));
            }
        }
        Ok(())
    }

    #[test]
    fn test_gas_transfer_pays_fee_from_other_utxos() -> anyhow::Result<()> {
        let chain = Chain::new();
        let alice = TestSigner::from_seed(23);
        let bob = TestSigner::from_seed(24);
        let mut a = chain.open_account(ALICE, &alice, LocalTrusted)?;
        let mut b = UtxoAccount::new(
            BOB,
            bob.public_key(),
            Arc::clone(&chain.registry) as Arc<dyn KeyRegistryApi>,
            LocalTrusted,
        );

        let start: Amount = seed_gas_utxos(alice.omni_address())
            .iter()
            .map(|u| u.amount)
            .sum();
        a.transfer(GAS_ASSET_ID, pay(bob.omni_address(), 1000))?;
        let txid = sign_and_submit(&mut a, &alice)?;
        assert_eq!(a.balance(&GAS_ASSET_ID), start - 1000 - 10);

        let entry = chain.ledger.get_transaction(&txid)?;
        b.handle_omniverse_tx(&entry.encoded(), &[], &entry.public_key, &[])?;
        assert_eq!(b.balance(&GAS_ASSET_ID), 1000);
        Ok(())
    }

    // =============================================================================
    // RELAY ACROSS CHAINS
    // =============================================================================

    #[test]
    fn test_beacon_account_waits_for_state_keeper() -> anyhow::Result<()> {
        init_tracing();
        let origin = Chain::new();
        let destination = Chain::new();
        let alice = TestSigner::from_seed(31);
        let bob = TestSigner::from_seed(32);

        let mut a = origin.open_account(ALICE, &alice, LocalTrusted)?;
        let mut b = destination.open_account(BOB, &bob, BeaconProof)?;

        a.mint(TOKEN, pay(bob.omni_address(), 25))?;
        let txid = sign_and_submit(&mut a, &alice)?;
        let entry = origin.ledger.get_transaction(&txid)?;
        let proof = encode_proof_word(entry.index);

        assert_eq!(
            b.handle_omniverse_tx(&entry.encoded(), &[], &entry.public_key, &proof),
            Err(AccountError::TransactionNotExistsInStateKeeper(txid))
        );

        let keeper = LedgerStateKeeper::new([0x5E; 20], Arc::clone(&origin.ledger));
        b.set_state_keeper(Arc::new(keeper) as Arc<dyn InclusionOracle>);

        let wrong_index = encode_proof_word(entry.index + 1);
        assert_eq!(
            b.handle_omniverse_tx(&entry.encoded(), &[], &entry.public_key, &wrong_index),
            Err(AccountError::TransactionNotExistsInStateKeeper(txid))
        );

        assert_eq!(
            b.handle_omniverse_tx(&entry.encoded(), &[], &entry.public_key, &proof)?,
            txid
        );
        assert_eq!(b.balance(&TOKEN), 25);
        assert!(b.handled(&txid));

        assert_eq!(
            b.handle_omniverse_tx(&entry.encoded(), &[], &entry.public_key, &proof),
            Err(AccountError::TransactionAlreadyHandled(txid))
        );
        assert_eq!(b.balance(&TOKEN), 25);
        Ok(())
    }
}
