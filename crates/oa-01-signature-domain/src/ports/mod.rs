//! # Ports Layer
//!
//! Inbound API exposed to the registry, the ledger and the account.

pub mod inbound;
