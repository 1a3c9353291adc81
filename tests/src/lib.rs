//! # Omniverse AA Test Suite
//!
//! Cross-crate flows that no single subsystem crate can exercise alone.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks (hashing, recovery, construction)
//! └── src/integration/
//!     ├── flows.rs        # register -> construct -> submit -> relay -> handle
//!     └── concurrency.rs  # many accounts on one registry and ledger
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p oa-tests
//! RUST_LOG=debug cargo test -p oa-tests integration::flows
//! cargo bench -p oa-tests
//! ```

pub mod integration;
