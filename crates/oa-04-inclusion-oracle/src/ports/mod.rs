//! # Ports Layer
//!
//! - `inbound`: the policy capability an account is parametrized over
//! - `outbound`: the external state keeper

pub mod inbound;
pub mod outbound;
