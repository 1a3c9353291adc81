//! # Account Errors
//!
//! Every failure is terminal for the operation and leaves the account unchanged.

use super::config::ConfigError;
use oa_01_signature_domain::SignatureError;
use oa_02_key_registry::RegistryError;
use shared_types::{AssetId, CodecError, OmniAddress, TxId, UtxoRef};
use thiserror::Error;

/// Errors returned by `UtxoAccount` operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    // =========================================================================
    // Construction
    // =========================================================================
    /// UTXOs of `0` cannot cover the requested amount or the fee.
    #[error("Not enough UTXOs of asset 0x{}", hex::encode(.0))]
    TokenOfAAContractNotEnough(AssetId),

    /// Consumed plus produced UTXOs exceed `max_tx_utxo`.
    #[error("UTXO count {0} exceeds limit")]
    UTXONumberExceedLimit(usize),

    #[error("The gas token can not be minted")]
    GasTokenCanNotBeMinted,

    #[error("Token name length {0} exceeds limit")]
    TokenNameLengthExceedLimit(usize),

    // =========================================================================
    // Submission
    // =========================================================================
    /// The caller is not the holder of the account's registered signer key.
    #[error("Sender not registered")]
    SenderNotRegistered,

    /// No pending transaction.
    #[error("Transaction not exists")]
    TransactionNotExists,

    #[error("Transaction index mismatch: expected {expected}, got {actual}")]
    TransactionIndexNotMatch { expected: u64, actual: u64 },

    /// The local entry rejected the transaction; the pending one is kept.
    #[error("Submit to local entry failed: {0}")]
    SubmitToLocalEntryFailed(String),

    /// An input of the pending transaction was spent after it was constructed.
    #[error("Pending input {0:?} is no longer held")]
    PendingInputSpent(UtxoRef),

    #[error("Registration failed: {0}")]
    Registration(#[from] RegistryError),

    // =========================================================================
    // Inbound handling
    // =========================================================================
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(#[from] CodecError),

    #[error("Transaction not exists in state keeper: 0x{}", hex::encode(.0))]
    TransactionNotExistsInStateKeeper(TxId),

    #[error("Signature verification failed")]
    SignatureVerifyFailed,

    #[error("Not UTXO owner: signer {claimed}, owner {actual}")]
    NotUTXOOwner {
        claimed: OmniAddress,
        actual: OmniAddress,
    },

    /// A supplied UTXO does not match any input of the payload.
    #[error("UTXO {0:?} does not match any payload input")]
    InputUtxoMismatch(UtxoRef),

    #[error("Transaction already handled: 0x{}", hex::encode(.0))]
    TransactionAlreadyHandled(TxId),

    /// Crediting would push the balance of `0` past `Amount::MAX`.
    #[error("Balance of asset 0x{} would overflow", hex::encode(.0))]
    BalanceOverflow(AssetId),

    // =========================================================================
    // Administration
    // =========================================================================
    #[error("Invalid system config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Rejection reported by a local entry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct LocalEntryError(pub String);

impl From<LocalEntryError> for AccountError {
    fn from(err: LocalEntryError) -> Self {
        AccountError::SubmitToLocalEntryFailed(err.0)
    }
}

impl From<SignatureError> for AccountError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::NotUtxoOwner { claimed, actual } => {
                AccountError::NotUTXOOwner { claimed, actual }
            }
            _ => AccountError::SignatureVerifyFailed,
        }
    }
}
