//! # Callvault
//!
//! Newest-first, path-indexed, cursor-paginated storage for function call
//! records and their logs, on top of any flat object store that offers
//! put, get, and ordered prefix listing.
//!
//! ## Quick Start
//!
//! ```
//! use callvault::prelude::*;
//! use chrono::Utc;
//!
//! let vault = CallVault::in_memory();
//!
//! let call = CallRecord::new(CallId::new(), "a1", "/hello", Utc::now())
//!     .with_body(json!({"status": "success"}));
//! vault.calls.insert(&call)?;
//! vault.logs.insert("a1", &call.id, b"hello world\n".to_vec())?;
//!
//! let page = vault.calls.list(&CallFilter::new("a1", 50))?;
//! assert_eq!(page.calls[0].id, call.id);
//! # Ok::<(), callvault::Error>(())
//! ```
//!
//! ## Key layout
//!
//! | Object | Key |
//! |--------|-----|
//! | Call record | `calls/<app>/<descending id>` |
//! | Path marker | `markers/<app>/<base64 path>/<descending id>` |
//! | Log | `logs/<app>/<id>` |
//!
//! Ids are time ordered and stored complemented, so an ascending listing of
//! a namespace returns the newest call first.
//!
//! ## Progressive Disclosure
//!
//! 1. **Simple** - Background context: `vault.calls.list(&filter)`
//! 2. **Bounded** - Cancellable or with a deadline: `vault.calls.list_with(&ctx, &filter)`

#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod primitives;
mod types;

pub mod prelude;

// Re-export main entry points
pub use config::Config;
pub use database::{CallVault, CallVaultBuilder};
pub use error::{Error, Result};

// Re-export primitives
pub use primitives::{Calls, Logs};

// Re-export types
pub use types::*;
