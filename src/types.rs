//! Public types for the callvault API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Records and identifiers
pub use callvault_core::{CallId, CallRecord, LogRecord};

// Listing
pub use callvault_core::{CallFilter, CallPage};

// Cancellation
pub use callvault_core::{CancelHandle, Interrupted, OpContext};

// Backends
pub use callvault_storage::{InMemoryStore, ObjectStore};

// Behaviour switches
pub use callvault_primitives::{CallStoreOptions, MarkerFailurePolicy};
