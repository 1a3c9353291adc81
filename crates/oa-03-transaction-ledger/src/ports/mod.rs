//! # Ports Layer
//!
//! - `inbound`: the ledger API used by accounts and relayers
//! - `outbound`: the key directory the ledger consults for caller identity

pub mod inbound;
pub mod outbound;
