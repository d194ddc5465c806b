//! Storage layer for callvault
//!
//! This crate defines the backend adapter contract and ships:
//! - [`ObjectStore`]: put / get / ordered prefix listing
//! - [`InMemoryStore`]: BTreeMap-backed reference implementation
//! - [`FaultInjectingStore`]: wrapper for failure injection and call journaling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod fault;
pub mod memory;

pub use backend::ObjectStore;
pub use fault::{BackendOp, FaultInjectingStore};
pub use memory::InMemoryStore;
