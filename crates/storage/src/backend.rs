//! Object store adapter contract
//!
//! The whole call store is built on three operations: put, get, and an
//! ordered prefix listing with an exclusive start key. Anything that can
//! provide them (S3-compatible buckets, local directories, an in-memory map)
//! can back a call store.

use callvault_core::{BackendError, OpContext};
use std::sync::Arc;

/// Narrow interface required from an object store.
///
/// # Contract
///
/// - `put` is last-writer-wins on the key.
/// - `get` returns [`BackendError::NotFound`] for a missing key and nothing
///   else for that case.
/// - `list_prefix` returns keys starting with `prefix`, strictly greater
///   than `start_after` when given, in ascending byte order, at most `limit`
///   of them. Fewer than `limit` keys means the prefix is exhausted.
/// - Every method receives the operation's [`OpContext`] and should give up
///   with [`BackendError::Interrupted`] once it reports cancellation or an
///   expired deadline.
///
/// Implementations must be safe to call concurrently.
pub trait ObjectStore: Send + Sync {
    /// Store `value` at `key`, replacing any existing object.
    fn put(&self, ctx: &OpContext, key: &str, value: &[u8]) -> Result<(), BackendError>;

    /// Fetch the object at `key`.
    fn get(&self, ctx: &OpContext, key: &str) -> Result<Vec<u8>, BackendError>;

    /// List keys under `prefix` in ascending order.
    fn list_prefix(
        &self,
        ctx: &OpContext,
        prefix: &str,
        start_after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<String>, BackendError>;
}

impl<T: ObjectStore + ?Sized> ObjectStore for Arc<T> {
    fn put(&self, ctx: &OpContext, key: &str, value: &[u8]) -> Result<(), BackendError> {
        (**self).put(ctx, key, value)
    }

    fn get(&self, ctx: &OpContext, key: &str) -> Result<Vec<u8>, BackendError> {
        (**self).get(ctx, key)
    }

    fn list_prefix(
        &self,
        ctx: &OpContext,
        prefix: &str,
        start_after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<String>, BackendError> {
        (**self).list_prefix(ctx, prefix, start_after, limit)
    }
}
