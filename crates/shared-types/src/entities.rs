//! # Core Domain Entities
//!
//! Identifiers and the UTXO record.
//!
//! ## Identity Forms
//!
//! | Type | Size | Meaning |
//! |------|------|---------|
//! | `Address` | 20 bytes | Host-platform identity, `keccak256(pubkey)[12..]` |
//! | `PublicKey` | 64 bytes | Uncompressed secp256k1 key without the `0x04` prefix |
//! | `OmniAddress` | 32 bytes | x-coordinate of a `PublicKey`, used inside payloads |

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

/// A 32-byte hash (Keccak-256).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Transaction identifier (struct hash of the unsigned payload).
pub type TxId = Hash;

/// Fixed-width asset identifier.
pub type AssetId = Hash;

/// Token amount in base units.
pub type Amount = u128;

/// The all-zero txid reported when no transaction is pending.
pub const ZERO_TXID: TxId = [0u8; 32];

/// Asset id reserved for the fee-paying gas asset.
pub const GAS_ASSET_ID: AssetId = [0u8; 32];

/// Maximum token name length in bytes for a Deploy.
pub const MAX_TOKEN_NAME_BYTES: usize = 24;

// =============================================================================
// KEYS AND ADDRESSES
// =============================================================================

/// Uncompressed secp256k1 public key (x || y), 64 bytes.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(#[serde_as(as = "Bytes")] pub [u8; 64]);

impl PublicKey {
    /// Builds a key from 64 raw bytes, or from 65 bytes carrying the `0x04` prefix.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let raw = match bytes.len() {
            64 => bytes,
            65 if bytes[0] == 0x04 => &bytes[1..],
            _ => return None,
        };
        let mut key = [0u8; 64];
        key.copy_from_slice(raw);
        Some(Self(key))
    }

    /// The omniverse address of this key (its x-coordinate).
    pub fn omni_address(&self) -> OmniAddress {
        let mut x = [0u8; 32];
        x.copy_from_slice(&self.0[..32]);
        OmniAddress(x)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(0x{}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Cross-chain identity reference used inside transaction payloads.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct OmniAddress(pub [u8; 32]);

impl fmt::Debug for OmniAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OmniAddress(0x{}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for OmniAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Lowercase `0x`-prefixed hex form of an address.
pub fn address_to_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

// =============================================================================
// UTXO
// =============================================================================

/// Reference to a transaction output: `(txid, output index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UtxoRef {
    /// Transaction that created the output.
    pub txid: TxId,
    /// Position of the output in `outputs ++ feeOutputs`.
    pub index: u64,
}

/// An unspent, indivisible record of value.
///
/// Immutable once created; consumed wholesale as an input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Utxo {
    /// Transaction that created this UTXO.
    pub txid: TxId,
    /// Output index inside that transaction.
    pub index: u64,
    /// Amount in base units.
    pub amount: Amount,
    /// Owner of the UTXO.
    pub owner: OmniAddress,
    /// Asset this UTXO denominates.
    pub asset_id: AssetId,
}

impl Utxo {
    /// The `(txid, index)` reference of this UTXO.
    pub fn outpoint(&self) -> UtxoRef {
        UtxoRef {
            txid: self.txid,
            index: self.index,
        }
    }
}
