//! # UTXO Account Subsystem (oa-05)
//!
//! The central account state machine: owns per-asset UTXO sets, constructs
//! unsigned Deploy, Mint and Transfer payloads within the configured limits,
//! submits signed payloads to a local entry and applies transactions
//! finalized elsewhere once an inclusion policy accepts them.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      UtxoAccount<P>                          │
//! │  deploy / mint / transfer ──▶ TxBuilder ──▶ pending slot     │
//! │  submit_tx ──▶ LocalEntry (port) ──▶ apply_tx ──▶ UtxoSet    │
//! │  handle_omniverse_tx ──▶ P: InclusionPolicy ──▶ apply_tx     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adapters
//!
//! - `LedgerLocalEntry`: publishes to an `oa-03` transaction ledger
//! - `LedgerStateKeeper`: inclusion oracle over an `oa-03` ledger

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::{LedgerLocalEntry, LedgerStateKeeper};
pub use domain::{
    AccountError, AccountState, ConfigError, FeeConfig, LocalEntryError, PendingTx, SystemConfig,
    UnsignedTx, UtxoSet,
};
pub use ports::inbound::UtxoAccountApi;
pub use ports::outbound::LocalEntry;
pub use service::UtxoAccount;
