//! Convenient imports for callvault.
//!
//! ```ignore
//! use callvault::prelude::*;
//!
//! let vault = CallVault::in_memory();
//! let page = vault.calls.list(&CallFilter::new("a1", 50))?;
//! ```

// Main entry point
pub use crate::database::{CallVault, CallVaultBuilder};
pub use crate::config::Config;

// Error handling
pub use crate::error::{Error, Result};

// Primitives
pub use crate::primitives::{Calls, Logs};

// Core types
pub use crate::types::{CallFilter, CallId, CallPage, CallRecord, LogRecord};

// Cancellation
pub use crate::types::{CancelHandle, OpContext};

// Backends and options
pub use crate::types::{CallStoreOptions, InMemoryStore, MarkerFailurePolicy, ObjectStore};

// Re-export for convenience
pub use serde_json::json;
pub use std::sync::Arc;
