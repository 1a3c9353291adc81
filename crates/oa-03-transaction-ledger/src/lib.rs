//! # Transaction Ledger Subsystem (OA-03)
//!
//! The local entry: an append-only, txid-keyed log that relays signed
//! transactions to other chains.
//!
//! ## Invariants
//!
//! - Only a caller's own bound keys can publish on its behalf.
//! - A txid is stored at most once.
//! - Sequence indices start at 0 and are gap-free.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use domain::{LedgerEntry, LedgerError};
pub use ports::inbound::TransactionLedgerApi;
pub use ports::outbound::KeyDirectory;
pub use service::{RegistryLedger, TransactionLedger};
