//! Vault Integration Tests
//!
//! Facade-level behaviour: configuration loading, marker failure policies,
//! cancellation, and the log store.
//!
//! ```bash
//! cargo test --test vault
//! ```

#[path = "../common/mod.rs"]
mod common;

mod cancellation;
mod config;
mod policies;
