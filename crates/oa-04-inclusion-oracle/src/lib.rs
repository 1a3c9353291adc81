//! # Inclusion Oracle Subsystem (OA-04)
//!
//! Gates inbound transactions on proof of finality at their origin.
//!
//! An account is generic over `InclusionPolicy`; both policies share the
//! account logic and differ only in this check.

pub mod domain;
pub mod ports;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use domain::{decode_proof_word, encode_proof_word, BeaconProof, LocalTrusted};
pub use ports::inbound::InclusionPolicy;
pub use ports::outbound::InclusionOracle;
