//! Core types and key codec for callvault
//!
//! This crate is pure: no I/O, no backend. It defines:
//! - [`CallId`]: time-ordered call identifier
//! - [`CallRecord`], [`LogRecord`]: what gets stored
//! - [`CallFilter`], [`CallPage`]: listing input and output
//! - [`keys`]: primary/marker/log key encoding and strict decoding
//! - [`descending`]: order-reversing byte encoding
//! - [`seek`]: time bound to partial key fragment
//! - [`OpContext`]: cancellation and deadlines for one operation
//! - [`Error`], [`BackendError`]: the error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod descending;
pub mod error;
pub mod filter;
pub mod keys;
pub mod record;
pub mod seek;
pub mod types;

pub use context::{CancelHandle, Interrupted, OpContext};
pub use error::{BackendError, Error, Result};
pub use filter::{CallFilter, CallPage};
pub use keys::KeySpace;
pub use record::{CallRecord, LogRecord};
pub use types::CallId;
