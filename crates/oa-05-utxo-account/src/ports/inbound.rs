//! # Inbound Ports (Driving Ports / API)

use crate::domain::{AccountError, AccountState, SystemConfig, UnsignedTx};
use shared_types::{
    Address, Amount, AssetId, EncodedTx, Metadata, Output, PublicKey, TxId, Utxo,
};

/// UTXO account API.
///
/// Every mutating call either completes fully or leaves the account unchanged.
pub trait UtxoAccountApi {
    /// Bind the account's signer key to the account address.
    ///
    /// `signature` is the key holder's EIP-191 signature over the registration
    /// message naming the account address.
    fn register(&mut self, signature: Vec<u8>) -> Result<(), AccountError>;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Build an unsigned Deploy into the pending slot.
    fn deploy(&mut self, metadata: Metadata) -> Result<TxId, AccountError>;

    /// Build an unsigned Mint into the pending slot.
    fn mint(&mut self, asset_id: AssetId, outputs: Vec<Output>) -> Result<TxId, AccountError>;

    /// Build an unsigned Transfer into the pending slot.
    fn transfer(&mut self, asset_id: AssetId, outputs: Vec<Output>)
        -> Result<TxId, AccountError>;

    /// The pending transaction, or an empty report with a zero txid.
    fn get_unsigned_tx(&self) -> UnsignedTx;

    // =========================================================================
    // Submission and inbound handling
    // =========================================================================

    /// Sign off the pending transaction and publish it to the local entry.
    ///
    /// Check order: caller is the registered signer, a transaction is pending,
    /// `tx_index` matches it, its inputs are all still held, no balance
    /// overflows, the local entry accepts it.
    fn submit_tx(
        &mut self,
        caller: Address,
        tx_index: u64,
        signature: Vec<u8>,
    ) -> Result<TxId, AccountError>;

    /// Apply a transaction finalized elsewhere.
    ///
    /// Check order: decode, inclusion, signature, input ownership, extra
    /// UTXOs match payload inputs, not yet handled, no balance overflows.
    fn handle_omniverse_tx(
        &mut self,
        tx: &EncodedTx,
        extra_utxos: &[Utxo],
        sender: &PublicKey,
        custom_data: &[u8],
    ) -> Result<TxId, AccountError>;

    // =========================================================================
    // Queries
    // =========================================================================

    /// Unspent outputs of `asset_id` in selection order.
    fn get_utxos(&self, asset_id: &AssetId) -> Vec<Utxo>;

    fn balance(&self, asset_id: &AssetId) -> Amount;

    fn state(&self) -> AccountState;

    fn system_config(&self) -> &SystemConfig;

    // =========================================================================
    // Administration
    // =========================================================================

    fn update_system_config(&mut self, config: SystemConfig) -> Result<(), AccountError>;
}
