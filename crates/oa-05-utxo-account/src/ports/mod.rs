//! # Ports Layer
//!
//! - `inbound`: the account API driven by its owner and by relayers
//! - `outbound`: the local entry signed transactions are published to

pub mod inbound;
pub mod outbound;
