//! # Typed Payload Hashing (EIP-712)
//!
//! Struct hashes for Deploy, Mint and Transfer, the domain separator and the
//! signed digest.
//!
//! ```text
//! digest = keccak256(0x19 0x01 || domainSeparator || structHash(tx))
//! txid   = structHash(tx)
//! ```
//!
//! Nested `Input[]` / `Output[]` arrays hash as the keccak of their
//! concatenated element hashes, in array order.

use super::ecdsa::keccak256;
use super::entities::Eip712Domain;
use primitive_types::U256;
use shared_types::{
    AssetId, Deploy, Hash, Input, Metadata, Mint, OmniverseTx, Output, Transfer, TxId,
};

pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";
pub const INPUT_TYPE: &str = "Input(bytes32 txid,uint64 index,uint128 amount,bytes32 omniAddress)";
pub const OUTPUT_TYPE: &str = "Output(bytes32 omniAddress,uint128 amount)";
const DEPLOY_PRIMARY: &str = "Deploy(bytes8 salt,string name,bytes32 deployer,uint128 totalSupply,uint128 limit,uint128 price,Input[] feeInputs,Output[] feeOutputs)";
const MINT_PRIMARY: &str =
    "Mint(bytes32 assetId,Output[] outputs,Input[] feeInputs,Output[] feeOutputs)";
const TRANSFER_PRIMARY: &str = "Transfer(bytes32 assetId,Input[] inputs,Output[] outputs,Input[] feeInputs,Output[] feeOutputs)";

/// Full encoded type of a primary struct: itself followed by referenced types
/// in alphabetical order.
fn encode_type(primary: &str) -> String {
    format!("{primary}{INPUT_TYPE}{OUTPUT_TYPE}")
}

fn type_hash(encoded_type: &str) -> Hash {
    keccak256(encoded_type.as_bytes())
}

// =============================================================================
// ATOMIC WORDS
// =============================================================================

fn uint_word(value: impl Into<U256>) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.into().to_big_endian(&mut word);
    word
}

/// `bytes8` is left-aligned and zero padded on the right.
fn bytes8_word(value: &[u8; 8]) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[..8].copy_from_slice(value);
    word
}

fn address_word(value: &[u8; 20]) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(value);
    word
}

fn hash_words(words: &[[u8; 32]]) -> Hash {
    keccak256(&words.concat())
}

// =============================================================================
// STRUCT HASHES
// =============================================================================

/// Domain separator for `domain`.
pub fn domain_separator(domain: &Eip712Domain) -> Hash {
    hash_words(&[
        type_hash(DOMAIN_TYPE),
        keccak256(domain.name.as_bytes()),
        keccak256(domain.version.as_bytes()),
        uint_word(domain.chain_id),
        address_word(&domain.verifying_contract),
    ])
}

pub fn hash_input(input: &Input) -> Hash {
    hash_words(&[
        type_hash(INPUT_TYPE),
        input.txid,
        uint_word(input.index),
        uint_word(input.amount),
        input.owner.0,
    ])
}

pub fn hash_output(output: &Output) -> Hash {
    hash_words(&[type_hash(OUTPUT_TYPE), output.owner.0, uint_word(output.amount)])
}

fn hash_inputs(inputs: &[Input]) -> Hash {
    let hashes: Vec<Hash> = inputs.iter().map(hash_input).collect();
    hash_words(&hashes)
}

fn hash_outputs(outputs: &[Output]) -> Hash {
    let hashes: Vec<Hash> = outputs.iter().map(hash_output).collect();
    hash_words(&hashes)
}

fn hash_deploy(deploy: &Deploy) -> Hash {
    let m = &deploy.metadata;
    hash_words(&[
        type_hash(&encode_type(DEPLOY_PRIMARY)),
        bytes8_word(&m.salt),
        keccak256(m.name.as_bytes()),
        m.deployer.0,
        uint_word(m.total_supply),
        uint_word(m.limit),
        uint_word(m.price),
        hash_inputs(&deploy.fee_inputs),
        hash_outputs(&deploy.fee_outputs),
    ])
}

fn hash_mint(mint: &Mint) -> Hash {
    hash_words(&[
        type_hash(&encode_type(MINT_PRIMARY)),
        mint.asset_id,
        hash_outputs(&mint.outputs),
        hash_inputs(&mint.fee_inputs),
        hash_outputs(&mint.fee_outputs),
    ])
}

fn hash_transfer(transfer: &Transfer) -> Hash {
    hash_words(&[
        type_hash(&encode_type(TRANSFER_PRIMARY)),
        transfer.asset_id,
        hash_inputs(&transfer.inputs),
        hash_outputs(&transfer.outputs),
        hash_inputs(&transfer.fee_inputs),
        hash_outputs(&transfer.fee_outputs),
    ])
}

/// EIP-712 struct hash of a transaction. The signature is not part of it.
pub fn struct_hash(tx: &OmniverseTx) -> Hash {
    match tx {
        OmniverseTx::Deploy(d) => hash_deploy(d),
        OmniverseTx::Mint(m) => hash_mint(m),
        OmniverseTx::Transfer(t) => hash_transfer(t),
    }
}

/// Canonical transaction id.
pub fn compute_txid(tx: &OmniverseTx) -> TxId {
    struct_hash(tx)
}

/// Digest a signer signs: `keccak256(0x1901 || separator || structHash)`.
pub fn signing_digest(separator: &Hash, tx: &OmniverseTx) -> Hash {
    let mut buf = Vec::with_capacity(66);
    buf.extend_from_slice(&[0x19, 0x01]);
    buf.extend_from_slice(separator);
    buf.extend_from_slice(&struct_hash(tx));
    keccak256(&buf)
}

/// Asset id created by a Deploy: `keccak256(deployer || salt || name)`.
pub fn derive_asset_id(metadata: &Metadata) -> AssetId {
    let mut buf = Vec::with_capacity(32 + 8 + metadata.name.len());
    buf.extend_from_slice(&metadata.deployer.0);
    buf.extend_from_slice(&metadata.salt);
    buf.extend_from_slice(metadata.name.as_bytes());
    keccak256(&buf)
}
