//! # Omniverse Transactions
//!
//! The three transaction shapes and their tagged container.
//!
//! ```text
//! EncodedTx { tx_type: u8, payload: bytes }
//!        │ decode (by tag)
//!        ▼
//! OmniverseTx::Deploy(Deploy) | ::Mint(Mint) | ::Transfer(Transfer)
//! ```
//!
//! Field order and array order are part of the signed content; nothing here
//! sorts or normalizes.

use crate::codec;
use crate::entities::{Amount, AssetId, OmniAddress, TxId, Utxo};
use crate::errors::CodecError;
use serde::{Deserialize, Serialize};

/// Transaction tag carried next to every payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TxType {
    /// Creates a new asset.
    Deploy = 0,
    /// Issues units of an existing asset.
    Mint = 1,
    /// Moves units between owners.
    Transfer = 2,
}

impl TryFrom<u8> for TxType {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TxType::Deploy),
            1 => Ok(TxType::Mint),
            2 => Ok(TxType::Transfer),
            other => Err(CodecError::UnknownTxType(other)),
        }
    }
}

impl From<TxType> for u8 {
    fn from(value: TxType) -> Self {
        value as u8
    }
}

/// A spent UTXO as it appears inside a payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Input {
    pub txid: TxId,
    pub index: u64,
    pub amount: Amount,
    pub owner: OmniAddress,
}

impl From<&Utxo> for Input {
    fn from(utxo: &Utxo) -> Self {
        Self {
            txid: utxo.txid,
            index: utxo.index,
            amount: utxo.amount,
            owner: utxo.owner,
        }
    }
}

/// A newly produced UTXO as it appears inside a payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Output {
    pub owner: OmniAddress,
    pub amount: Amount,
}

/// Definition of a new asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub salt: [u8; 8],
    /// At most `MAX_TOKEN_NAME_BYTES` bytes.
    pub name: String,
    pub deployer: OmniAddress,
    pub total_supply: Amount,
    pub limit: Amount,
    pub price: Amount,
}

/// Deploy payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deploy {
    pub metadata: Metadata,
    /// Empty until signed; 65 bytes `r || s || v` afterwards.
    pub signature: Vec<u8>,
    pub fee_inputs: Vec<Input>,
    pub fee_outputs: Vec<Output>,
}

/// Mint payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mint {
    pub asset_id: AssetId,
    pub signature: Vec<u8>,
    pub outputs: Vec<Output>,
    pub fee_inputs: Vec<Input>,
    pub fee_outputs: Vec<Output>,
}

/// Transfer payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub asset_id: AssetId,
    pub signature: Vec<u8>,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub fee_inputs: Vec<Input>,
    pub fee_outputs: Vec<Output>,
}

/// A tagged transaction as it travels between chains: the raw tag and bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedTx {
    pub tx_type: u8,
    pub payload: Vec<u8>,
}

/// Closed set of transaction variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OmniverseTx {
    Deploy(Deploy),
    Mint(Mint),
    Transfer(Transfer),
}

impl OmniverseTx {
    /// The tag of this variant.
    pub fn tx_type(&self) -> TxType {
        match self {
            OmniverseTx::Deploy(_) => TxType::Deploy,
            OmniverseTx::Mint(_) => TxType::Mint,
            OmniverseTx::Transfer(_) => TxType::Transfer,
        }
    }

    /// Asset the non-fee outputs denominate. Deploy has none.
    pub fn asset_id(&self) -> Option<AssetId> {
        match self {
            OmniverseTx::Deploy(_) => None,
            OmniverseTx::Mint(m) => Some(m.asset_id),
            OmniverseTx::Transfer(t) => Some(t.asset_id),
        }
    }

    pub fn signature(&self) -> &[u8] {
        match self {
            OmniverseTx::Deploy(d) => &d.signature,
            OmniverseTx::Mint(m) => &m.signature,
            OmniverseTx::Transfer(t) => &t.signature,
        }
    }

    pub fn set_signature(&mut self, signature: Vec<u8>) {
        match self {
            OmniverseTx::Deploy(d) => d.signature = signature,
            OmniverseTx::Mint(m) => m.signature = signature,
            OmniverseTx::Transfer(t) => t.signature = signature,
        }
    }

    /// Spending inputs of the main asset (only Transfer has them).
    pub fn inputs(&self) -> &[Input] {
        match self {
            OmniverseTx::Transfer(t) => &t.inputs,
            _ => &[],
        }
    }

    /// Outputs of the main asset (Deploy has none).
    pub fn outputs(&self) -> &[Output] {
        match self {
            OmniverseTx::Deploy(_) => &[],
            OmniverseTx::Mint(m) => &m.outputs,
            OmniverseTx::Transfer(t) => &t.outputs,
        }
    }

    pub fn fee_inputs(&self) -> &[Input] {
        match self {
            OmniverseTx::Deploy(d) => &d.fee_inputs,
            OmniverseTx::Mint(m) => &m.fee_inputs,
            OmniverseTx::Transfer(t) => &t.fee_inputs,
        }
    }

    pub fn fee_outputs(&self) -> &[Output] {
        match self {
            OmniverseTx::Deploy(d) => &d.fee_outputs,
            OmniverseTx::Mint(m) => &m.fee_outputs,
            OmniverseTx::Transfer(t) => &t.fee_outputs,
        }
    }

    /// Every consumed input: spending inputs then fee inputs.
    pub fn all_inputs(&self) -> impl Iterator<Item = &Input> {
        self.inputs().iter().chain(self.fee_inputs())
    }

    /// Every produced output in canonical numbering order (`outputs ++ feeOutputs`).
    pub fn all_outputs(&self) -> impl Iterator<Item = &Output> {
        self.outputs().iter().chain(self.fee_outputs())
    }

    /// Consumed plus produced UTXO count.
    pub fn utxo_count(&self) -> usize {
        self.inputs().len() + self.outputs().len() + self.fee_inputs().len() + self.fee_outputs().len()
    }

    /// Encode into the tagged wire form.
    pub fn encode(&self) -> Result<EncodedTx, CodecError> {
        let payload = match self {
            OmniverseTx::Deploy(d) => codec::encode(d)?,
            OmniverseTx::Mint(m) => codec::encode(m)?,
            OmniverseTx::Transfer(t) => codec::encode(t)?,
        };
        Ok(EncodedTx {
            tx_type: self.tx_type().into(),
            payload,
        })
    }

    /// Decode a payload by its tag.
    pub fn decode(tx_type: u8, payload: &[u8]) -> Result<Self, CodecError> {
        match TxType::try_from(tx_type)? {
            TxType::Deploy => codec::decode(payload).map(OmniverseTx::Deploy),
            TxType::Mint => codec::decode(payload).map(OmniverseTx::Mint),
            TxType::Transfer => codec::decode(payload).map(OmniverseTx::Transfer),
        }
    }
}

impl TryFrom<&EncodedTx> for OmniverseTx {
    type Error = CodecError;

    fn try_from(value: &EncodedTx) -> Result<Self, Self::Error> {
        OmniverseTx::decode(value.tx_type, &value.payload)
    }
}
