//! # UTXO Account Service
//!
//! Implements `UtxoAccountApi`: the account state machine.
//!
//! ```text
//!          deploy / mint / transfer
//!   Idle ───────────────────────────▶ AwaitingSubmission ──┐
//!    ▲                                   │                 │ construct again
//!    │          submit_tx (ok)           │                 │ (overwrites)
//!    └───────────────────────────────────┘◀────────────────┘
//! ```
//!
//! ## Atomicity
//!
//! Every operation takes `&mut self` and runs all of its checks before the
//! first mutation, so a failure leaves UTXOs, the pending slot and the
//! handled set untouched. Accounts shared between threads go behind
//! `Arc<parking_lot::Mutex<_>>`.
//!
//! A pending transaction remembers the fee asset it was built under and is
//! refused at submission once any of its inputs has been spent by an inbound
//! transaction.

use crate::domain::{
    apply_tx, check_credit, first_missing_input, AccountError, AccountState, PendingTx,
    SystemConfig, TxBuilder, UnsignedTx, UtxoSet,
};
use crate::ports::inbound::UtxoAccountApi;
use crate::ports::outbound::LocalEntry;
use oa_01_signature_domain::{
    address_from_public_key, derive_asset_id, SignatureDomain, SignatureDomainApi,
};
use oa_02_key_registry::KeyRegistryApi;
use oa_04_inclusion_oracle::{InclusionOracle, InclusionPolicy};
use shared_types::{
    address_to_hex, Address, Amount, AssetId, EncodedTx, Metadata, OmniAddress, OmniverseTx,
    Output, PublicKey, TxId, Utxo,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One account: its UTXOs, pending slot and inbound history.
///
/// `P` decides whether an inbound txid counts as finalized.
pub struct UtxoAccount<P: InclusionPolicy> {
    address: Address,
    signer: PublicKey,
    omni: OmniAddress,
    registry: Arc<dyn KeyRegistryApi>,
    domain: SignatureDomain,
    policy: P,
    config: SystemConfig,
    local_entry: Option<Arc<dyn LocalEntry>>,
    state_keeper: Option<Arc<dyn InclusionOracle>>,
    utxos: UtxoSet,
    pending: Option<PendingTx>,
    next_tx_index: u64,
    handled: HashSet<TxId>,
    assets: HashMap<AssetId, Metadata>,
}

impl<P: InclusionPolicy> UtxoAccount<P> {
    /// Account at host `address` whose UTXOs belong to `signer`'s omniverse address.
    pub fn new(
        address: Address,
        signer: PublicKey,
        registry: Arc<dyn KeyRegistryApi>,
        policy: P,
    ) -> Self {
        Self {
            address,
            signer,
            omni: signer.omni_address(),
            registry,
            domain: SignatureDomain::default(),
            policy,
            config: SystemConfig::default(),
            local_entry: None,
            state_keeper: None,
            utxos: UtxoSet::new(),
            pending: None,
            next_tx_index: 0,
            handled: HashSet::new(),
            assets: HashMap::new(),
        }
    }

    pub fn with_domain(mut self, domain: SignatureDomain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_config(mut self, config: SystemConfig) -> Result<Self, AccountError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Seed the UTXO set. Duplicate outpoints and UTXOs of other owners are
    /// skipped.
    pub fn with_utxos(
        mut self,
        utxos: impl IntoIterator<Item = Utxo>,
    ) -> Result<Self, AccountError> {
        for utxo in utxos {
            if utxo.owner != self.omni {
                debug!("[oa-05] Skipped seed UTXO owned by {}", utxo.owner);
                continue;
            }
            if self
                .utxos
                .balance(&utxo.asset_id)
                .checked_add(utxo.amount)
                .is_none()
            {
                return Err(AccountError::BalanceOverflow(utxo.asset_id));
            }
            if !self.utxos.insert(utxo) {
                debug!("[oa-05] Skipped duplicate seed UTXO");
            }
        }
        Ok(self)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn signer(&self) -> &PublicKey {
        &self.signer
    }

    pub fn omni_address(&self) -> OmniAddress {
        self.omni
    }

    pub fn signature_domain(&self) -> &SignatureDomain {
        &self.domain
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Metadata of an asset deployed through this account or seen inbound.
    pub fn get_asset(&self, asset_id: &AssetId) -> Option<&Metadata> {
        self.assets.get(asset_id)
    }

    /// Whether `txid` was committed by this account or handled inbound.
    pub fn handled(&self, txid: &TxId) -> bool {
        self.handled.contains(txid)
    }

    /// Index the next constructed transaction will carry.
    pub fn next_tx_index(&self) -> u64 {
        self.next_tx_index
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    pub fn set_local_entry(&mut self, entry: Arc<dyn LocalEntry>) {
        self.config.local_entry = entry.address();
        info!(
            "[oa-05] Local entry set to {}",
            address_to_hex(&self.config.local_entry)
        );
        self.local_entry = Some(entry);
    }

    pub fn set_state_keeper(&mut self, oracle: Arc<dyn InclusionOracle>) {
        self.config.state_keeper = oracle.address();
        info!(
            "[oa-05] State keeper set to {}",
            address_to_hex(&self.config.state_keeper)
        );
        self.state_keeper = Some(oracle);
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn builder(&self) -> TxBuilder<'_> {
        TxBuilder::new(&self.utxos, &self.config, self.omni)
    }

    fn stage(&mut self, tx: OmniverseTx) -> TxId {
        let txid = self.domain.txid(&tx);
        if let Some(replaced) = &self.pending {
            debug!(
                "[oa-05] Discarding unsubmitted tx 0x{}",
                hex::encode(&replaced.txid[..8])
            );
        }
        info!(
            "[oa-05] Staged {:?} tx 0x{} at index {} ({} UTXOs)",
            tx.tx_type(),
            hex::encode(&txid[..8]),
            self.next_tx_index,
            tx.utxo_count()
        );
        self.pending = Some(PendingTx {
            tx_index: self.next_tx_index,
            txid,
            tx,
            fee_asset: self.config.fee.asset_id,
        });
        txid
    }

    fn check_submitter(&self, caller: &Address) -> Result<(), AccountError> {
        let bound = self.registry.owner_of(&self.signer) == Some(self.address);
        if !bound || *caller != address_from_public_key(&self.signer) {
            warn!(
                "[oa-05] Submission by {} rejected: not the registered signer",
                address_to_hex(caller)
            );
            return Err(AccountError::SenderNotRegistered);
        }
        Ok(())
    }

    fn check_inputs(
        &self,
        tx: &OmniverseTx,
        extra_utxos: &[Utxo],
        sender: &PublicKey,
    ) -> Result<(), AccountError> {
        let claimed = sender.omni_address();
        for input in tx.all_inputs() {
            self.domain.assert_owner(&claimed, &input.owner)?;
        }
        for utxo in extra_utxos {
            self.domain.assert_owner(&claimed, &utxo.owner)?;
            let listed = tx.all_inputs().any(|i| {
                i.txid == utxo.txid
                    && i.index == utxo.index
                    && i.amount == utxo.amount
                    && i.owner == utxo.owner
            });
            if !listed {
                return Err(AccountError::InputUtxoMismatch(utxo.outpoint()));
            }
        }
        Ok(())
    }

    /// Apply a checked transaction. Cannot fail.
    fn commit(&mut self, tx: &OmniverseTx, txid: TxId, fee_asset: AssetId) {
        if let OmniverseTx::Deploy(deploy) = tx {
            let asset_id = derive_asset_id(&deploy.metadata);
            self.assets
                .entry(asset_id)
                .or_insert_with(|| deploy.metadata.clone());
        }
        let applied = apply_tx(&mut self.utxos, tx, txid, self.omni, fee_asset);
        self.handled.insert(txid);
        debug!(
            "[oa-05] tx 0x{}: {} UTXOs spent, {} credited",
            hex::encode(&txid[..8]),
            applied.spent,
            applied.credited
        );
    }
}

impl<P: InclusionPolicy> UtxoAccountApi for UtxoAccount<P> {
    fn register(&mut self, signature: Vec<u8>) -> Result<(), AccountError> {
        self.registry
            .register(self.address, &[self.signer], &[signature])?;
        info!(
            "[oa-05] Signer {} registered to {}",
            self.omni,
            address_to_hex(&self.address)
        );
        Ok(())
    }

    fn deploy(&mut self, metadata: Metadata) -> Result<TxId, AccountError> {
        let tx = self.builder().deploy(metadata)?;
        Ok(self.stage(tx))
    }

    fn mint(&mut self, asset_id: AssetId, outputs: Vec<Output>) -> Result<TxId, AccountError> {
        let tx = self.builder().mint(asset_id, outputs)?;
        Ok(self.stage(tx))
    }

    fn transfer(
        &mut self,
        asset_id: AssetId,
        outputs: Vec<Output>,
    ) -> Result<TxId, AccountError> {
        let tx = self.builder().transfer(asset_id, outputs)?;
        Ok(self.stage(tx))
    }

    fn get_unsigned_tx(&self) -> UnsignedTx {
        self.pending
            .as_ref()
            .map(UnsignedTx::from)
            .unwrap_or_else(UnsignedTx::empty)
    }

    fn submit_tx(
        &mut self,
        caller: Address,
        tx_index: u64,
        signature: Vec<u8>,
    ) -> Result<TxId, AccountError> {
        self.check_submitter(&caller)?;

        let pending = self.pending.as_ref().ok_or(AccountError::TransactionNotExists)?;
        if pending.tx_index != tx_index {
            return Err(AccountError::TransactionIndexNotMatch {
                expected: pending.tx_index,
                actual: tx_index,
            });
        }
        if let Some(spent) =
            first_missing_input(&self.utxos, &pending.tx, self.omni, pending.fee_asset)
        {
            warn!(
                "[oa-05] Pending tx 0x{} spends {:?}, no longer held",
                hex::encode(&pending.txid[..8]),
                spent
            );
            return Err(AccountError::PendingInputSpent(spent));
        }
        check_credit(
            &self.utxos,
            &pending.tx,
            pending.txid,
            self.omni,
            pending.fee_asset,
        )?;
        let entry = self.local_entry.as_ref().ok_or_else(|| {
            AccountError::SubmitToLocalEntryFailed("no local entry bound".to_string())
        })?;

        let txid = pending.txid;
        let fee_asset = pending.fee_asset;
        let mut signed = pending.tx.clone();
        signed.set_signature(signature);
        let encoded = signed.encode()?;

        if let Err(e) = entry.submit_tx(self.address, &encoded, &self.signer) {
            warn!(
                "[oa-05] Local entry rejected tx 0x{}: {}",
                hex::encode(&txid[..8]),
                e
            );
            return Err(e.into());
        }

        self.pending = None;
        self.commit(&signed, txid, fee_asset);
        self.next_tx_index += 1;
        info!(
            "[oa-05] Submitted tx 0x{} at index {}",
            hex::encode(&txid[..8]),
            tx_index
        );
        Ok(txid)
    }

    fn handle_omniverse_tx(
        &mut self,
        tx: &EncodedTx,
        extra_utxos: &[Utxo],
        sender: &PublicKey,
        custom_data: &[u8],
    ) -> Result<TxId, AccountError> {
        let decoded = OmniverseTx::try_from(tx)?;
        let txid = self.domain.txid(&decoded);

        if !self
            .policy
            .is_included(self.state_keeper.as_deref(), &txid, custom_data)
        {
            warn!(
                "[oa-05] tx 0x{} not confirmed under {}",
                hex::encode(&txid[..8]),
                self.policy.name()
            );
            return Err(AccountError::TransactionNotExistsInStateKeeper(txid));
        }

        self.domain.verify(&decoded, sender)?;
        self.check_inputs(&decoded, extra_utxos, sender)?;

        if self.handled.contains(&txid) {
            return Err(AccountError::TransactionAlreadyHandled(txid));
        }
        let fee_asset = self.config.fee.asset_id;
        check_credit(&self.utxos, &decoded, txid, self.omni, fee_asset)?;

        self.commit(&decoded, txid, fee_asset);
        info!(
            "[oa-05] Handled inbound {:?} tx 0x{} from {}",
            decoded.tx_type(),
            hex::encode(&txid[..8]),
            sender.omni_address()
        );
        Ok(txid)
    }

    fn get_utxos(&self, asset_id: &AssetId) -> Vec<Utxo> {
        self.utxos.utxos(asset_id).to_vec()
    }

    fn balance(&self, asset_id: &AssetId) -> Amount {
        self.utxos.balance(asset_id)
    }

    fn state(&self) -> AccountState {
        match self.pending {
            Some(_) => AccountState::AwaitingSubmission,
            None => AccountState::Idle,
        }
    }

    fn system_config(&self) -> &SystemConfig {
        &self.config
    }

    fn update_system_config(&mut self, config: SystemConfig) -> Result<(), AccountError> {
        config.validate()?;
        info!(
            "[oa-05] System config updated: fee {} max_tx_utxo {}",
            config.fee.amount, config.max_tx_utxo
        );
        self.config = config;
        Ok(())
    }
}
