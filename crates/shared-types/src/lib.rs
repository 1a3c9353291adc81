//! # Shared Types Crate
//!
//! Types shared by every Omniverse AA subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identifiers, UTXO records and the three
//!   transaction payloads (Deploy, Mint, Transfer) are defined once, here.
//! - **Canonical Bytes**: `codec` is the only way payloads are turned into
//!   bytes, so txids and signatures are reproducible across implementations.
//! - **Closed Variants**: `OmniverseTx` is a tagged enum dispatched by
//!   `TxType`; there is no open-ended payload trait.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod transaction;

pub use entities::*;
pub use errors::*;
pub use transaction::*;
