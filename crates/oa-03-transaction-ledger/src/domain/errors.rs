//! # Ledger Errors

use oa_01_signature_domain::SignatureError;
use shared_types::{Address, CodecError, PublicKey, TxId};
use thiserror::Error;

/// Errors returned by the transaction ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The caller has no bound keys.
    #[error("Sender not registered")]
    SenderNotRegistered,

    /// The key is not among the caller's keys; `owner` is who holds it, if anyone.
    #[error("Public key {public_key} not bound to caller (owner: {owner:?})")]
    PublicKeyNotBoundToAAContract {
        public_key: PublicKey,
        owner: Option<Address>,
    },

    /// Tag or payload bytes do not decode.
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(#[from] CodecError),

    /// The payload signature does not belong to the submitted key.
    #[error("Signature verification failed")]
    SignatureVerifyFailed,

    /// A transaction with this txid was already published.
    #[error("Transaction exists: 0x{}", hex::encode(.0))]
    TransactionExists(TxId),

    /// No entry for the requested txid or index.
    #[error("Transaction not exists")]
    TransactionNotExists,
}

impl From<SignatureError> for LedgerError {
    fn from(_: SignatureError) -> Self {
        LedgerError::SignatureVerifyFailed
    }
}
