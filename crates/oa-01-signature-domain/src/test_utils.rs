//! Key generation and signing helpers for tests.

use crate::domain::ecdsa::{address_from_public_key, invert_s, is_low_s, keccak256, personal_message_hash};
use crate::domain::entities::EcdsaSignature;
use crate::ports::inbound::SignatureDomainApi;
use k256::ecdsa::SigningKey;
use shared_types::{Address, Hash, OmniAddress, OmniverseTx, PublicKey};

/// A secp256k1 key pair that signs hashes, payloads and personal messages.
#[derive(Clone)]
pub struct TestSigner {
    signing_key: SigningKey,
    public_key: PublicKey,
}

impl TestSigner {
    /// Fresh random key.
    pub fn random() -> Self {
        Self::from_signing_key(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Deterministic key derived from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut material = b"omniverse-test-key".to_vec();
        material.extend_from_slice(&seed.to_be_bytes());
        let secret = keccak256(&material);
        let signing_key = SigningKey::from_slice(&secret).expect("keccak output is a valid scalar");
        Self::from_signing_key(signing_key)
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let encoded = signing_key.verifying_key().to_encoded_point(false);
        let public_key = PublicKey::from_slice(encoded.as_bytes()).expect("uncompressed point");
        Self {
            signing_key,
            public_key,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    pub fn address(&self) -> Address {
        address_from_public_key(&self.public_key)
    }

    pub fn omni_address(&self) -> OmniAddress {
        self.public_key.omni_address()
    }

    /// Sign a prehashed message; S normalized low, `v` in {27, 28}.
    pub fn sign_hash(&self, message_hash: &Hash) -> EcdsaSignature {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(message_hash)
            .expect("signing failed");

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        let (s, flipped) = if is_low_s(&s) {
            (s, false)
        } else {
            (invert_s(&s), true)
        };
        let v = (recid.to_byte() ^ flipped as u8) + 27;

        EcdsaSignature { r, s, v }
    }

    /// 65-byte signature over the typed digest of `tx`.
    pub fn sign_tx<D: SignatureDomainApi + ?Sized>(&self, domain: &D, tx: &OmniverseTx) -> Vec<u8> {
        self.sign_hash(&domain.signing_hash(tx)).to_bytes().to_vec()
    }

    /// `tx` with its signature slot filled in.
    pub fn signed<D: SignatureDomainApi + ?Sized>(&self, domain: &D, mut tx: OmniverseTx) -> OmniverseTx {
        let signature = self.sign_tx(domain, &tx);
        tx.set_signature(signature);
        tx
    }

    /// 65-byte EIP-191 personal-message signature.
    pub fn sign_personal(&self, message: &[u8]) -> Vec<u8> {
        self.sign_hash(&personal_message_hash(message)).to_bytes().to_vec()
    }
}
