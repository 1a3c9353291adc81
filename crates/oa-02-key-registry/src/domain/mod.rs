//! # Domain Layer
//!
//! Registration challenge and the key binding table.

pub mod bindings;
pub mod challenge;
pub mod errors;

pub use bindings::KeyBindings;
pub use challenge::{registration_hash, registration_message, DEFAULT_CHAIN_ID};
pub use errors::RegistryError;
