//! # Domain Layer
//!
//! Pure account logic: configuration, UTXO arena, selection and payload
//! construction, pending slot and application of committed transactions.

pub mod apply;
pub mod builder;
pub mod config;
pub mod errors;
pub mod pending;
pub mod utxo_set;

pub use apply::{apply_tx, check_credit, first_missing_input, Applied};
pub use builder::{select_covering, FeePart, TxBuilder};
pub use config::{ConfigError, FeeConfig, SystemConfig, DEFAULT_FEE_RECEIVER};
pub use errors::{AccountError, LocalEntryError};
pub use pending::{AccountState, PendingTx, UnsignedTx};
pub use utxo_set::UtxoSet;
