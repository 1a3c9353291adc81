//! # Domain Layer
//!
//! Ledger entries and the append-only log.

pub mod entities;
pub mod errors;
pub mod log;

pub use entities::LedgerEntry;
pub use errors::LedgerError;
pub use log::LedgerLog;
