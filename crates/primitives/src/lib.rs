//! Storage primitives for callvault
//!
//! - [`CallStore`]: call records, the path index, and paginated listing
//! - [`LogStore`]: per-call log payloads
//!
//! Both are stateless facades over an
//! [`ObjectStore`](callvault_storage::ObjectStore) and can be cloned freely.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call_store;
pub mod listing;
pub mod log_store;
pub mod options;

pub use call_store::CallStore;
pub use log_store::LogStore;
pub use options::{CallStoreOptions, MarkerFailurePolicy, DEFAULT_MAX_PAGE_SIZE};
