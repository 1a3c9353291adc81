//! # Domain Layer
//!
//! Concrete inclusion policies and the proof-context encoding.

pub mod custom_data;
pub mod policy;

pub use custom_data::{decode_proof_word, encode_proof_word};
pub use policy::{BeaconProof, LocalTrusted};
