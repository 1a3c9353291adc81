//! # Adapters Layer
//!
//! - `local_entry`: publishes submissions to a `TransactionLedger`
//! - `state_keeper`: attests inclusion from a `TransactionLedger`'s log

pub mod local_entry;
pub mod state_keeper;

pub use local_entry::LedgerLocalEntry;
pub use state_keeper::LedgerStateKeeper;
