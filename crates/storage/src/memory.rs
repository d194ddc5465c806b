//! In-memory object store
//!
//! BTreeMap behind a `parking_lot::RwLock`. Keys are kept sorted, so prefix
//! listing is a range scan rather than filter + sort.
//!
//! Used as the default backend for ephemeral vaults and in tests. It honours
//! the full [`ObjectStore`] contract, including context checks.

use crate::backend::ObjectStore;
use callvault_core::{BackendError, OpContext};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Ordered, thread-safe in-memory object store.
#[derive(Default)]
pub struct InMemoryStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    /// Check if an object exists at `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.objects.read().contains_key(key)
    }

    /// Remove an object, returning it if it existed.
    ///
    /// Not part of the adapter contract: the call store never deletes.
    /// Exposed for retention tooling and tests that simulate external
    /// deletion.
    pub fn remove(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.write().remove(key)
    }

    /// Snapshot of every key, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.objects.read().keys().cloned().collect()
    }
}

impl ObjectStore for InMemoryStore {
    fn put(&self, ctx: &OpContext, key: &str, value: &[u8]) -> Result<(), BackendError> {
        ctx.check()?;
        self.objects.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get(&self, ctx: &OpContext, key: &str) -> Result<Vec<u8>, BackendError> {
        ctx.check()?;
        self.objects
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| BackendError::NotFound {
                key: key.to_string(),
            })
    }

    fn list_prefix(
        &self,
        ctx: &OpContext,
        prefix: &str,
        start_after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<String>, BackendError> {
        ctx.check()?;
        // A start key below the prefix must not widen the scan.
        let lower = match start_after {
            Some(after) if after >= prefix => Bound::Excluded(after),
            _ => Bound::Included(prefix),
        };
        let objects = self.objects.read();
        Ok(objects
            .range::<str, _>((lower, Bound::Unbounded))
            .map(|(k, _)| k)
            .take_while(|k| k.starts_with(prefix))
            .take(limit)
            .cloned()
            .collect())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("objects", &self.len())
            .finish()
    }
}
