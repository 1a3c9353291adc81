//! # Ledger Entities

use serde::{Deserialize, Serialize};
use shared_types::{CodecError, EncodedTx, OmniverseTx, PublicKey, TxId, TxType};

/// A published transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Canonical txid of the payload.
    pub txid: TxId,
    pub tx_type: TxType,
    /// Encoded, signed payload exactly as submitted.
    pub payload: Vec<u8>,
    /// Key that signed the payload.
    pub public_key: PublicKey,
    /// Position in the log, gap-free from 0.
    pub index: u64,
}

impl LedgerEntry {
    /// The tagged wire form, as delivered to other chains.
    pub fn encoded(&self) -> EncodedTx {
        EncodedTx {
            tx_type: self.tx_type.into(),
            payload: self.payload.clone(),
        }
    }

    pub fn decode(&self) -> Result<OmniverseTx, CodecError> {
        OmniverseTx::decode(self.tx_type.into(), &self.payload)
    }
}
