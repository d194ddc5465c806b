//! Fault-injecting object store wrapper
//!
//! Wraps any [`ObjectStore`] and lets callers make selected operations fail,
//! run a hook before writes, and inspect the sequence of backend calls that
//! an operation issued. Used to exercise the marker failure policies,
//! cancellation between the two writes of an insert, and scan pruning.

use crate::backend::ObjectStore;
use callvault_core::{BackendError, OpContext};
use parking_lot::Mutex;
use std::sync::Arc;

/// One backend call as seen by [`FaultInjectingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendOp {
    /// `put(key, ..)`
    Put(String),
    /// `get(key)`
    Get(String),
    /// `list_prefix(prefix, start_after, limit)`
    List {
        /// Listing prefix
        prefix: String,
        /// Exclusive start key
        start_after: Option<String>,
        /// Requested key count
        limit: usize,
    },
}

type PutHook = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct Faults {
    put_prefixes: Vec<String>,
    get_prefixes: Vec<String>,
    fail_lists: bool,
    injected_keys: Vec<String>,
}

/// [`ObjectStore`] wrapper with configurable failures and a call journal.
pub struct FaultInjectingStore<S> {
    inner: S,
    faults: Mutex<Faults>,
    before_put: Mutex<Option<PutHook>>,
    journal: Mutex<Vec<BackendOp>>,
}

impl<S: ObjectStore> FaultInjectingStore<S> {
    /// Wrap `inner` with no faults configured.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            faults: Mutex::new(Faults::default()),
            before_put: Mutex::new(None),
            journal: Mutex::new(Vec::new()),
        }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Fail every `put` whose key starts with `prefix`.
    pub fn fail_puts_with_prefix(&self, prefix: impl Into<String>) {
        self.faults.lock().put_prefixes.push(prefix.into());
    }

    /// Fail every `get` whose key starts with `prefix`.
    pub fn fail_gets_with_prefix(&self, prefix: impl Into<String>) {
        self.faults.lock().get_prefixes.push(prefix.into());
    }

    /// Fail every `list_prefix`.
    pub fn fail_lists(&self) {
        self.faults.lock().fail_lists = true;
    }

    /// Make listings also report `key` when it falls under the listed prefix,
    /// as if a foreign object had been written next to ours.
    pub fn inject_listed_key(&self, key: impl Into<String>) {
        self.faults.lock().injected_keys.push(key.into());
    }

    /// Remove all configured faults.
    pub fn heal(&self) {
        *self.faults.lock() = Faults::default();
    }

    /// Run `hook` with the key before every `put` reaches the inner store.
    pub fn before_put(&self, hook: impl Fn(&str) + Send + Sync + 'static) {
        *self.before_put.lock() = Some(Arc::new(hook));
    }

    /// Calls issued so far, oldest first.
    pub fn journal(&self) -> Vec<BackendOp> {
        self.journal.lock().clone()
    }

    /// Number of `get` calls issued so far.
    pub fn get_count(&self) -> usize {
        self.journal
            .lock()
            .iter()
            .filter(|op| matches!(op, BackendOp::Get(_)))
            .count()
    }

    /// Forget recorded calls.
    pub fn clear_journal(&self) {
        self.journal.lock().clear();
    }

    fn record(&self, op: BackendOp) {
        self.journal.lock().push(op);
    }
}

fn injected(key: &str) -> BackendError {
    BackendError::failure(format!("injected failure for {key}"))
}

impl<S: ObjectStore> ObjectStore for FaultInjectingStore<S> {
    fn put(&self, ctx: &OpContext, key: &str, value: &[u8]) -> Result<(), BackendError> {
        self.record(BackendOp::Put(key.to_string()));
        // Clone out of the lock so the hook may reconfigure this store.
        let hook = self.before_put.lock().clone();
        if let Some(hook) = hook {
            hook(key);
        }
        if self
            .faults
            .lock()
            .put_prefixes
            .iter()
            .any(|p| key.starts_with(p.as_str()))
        {
            return Err(injected(key));
        }
        self.inner.put(ctx, key, value)
    }

    fn get(&self, ctx: &OpContext, key: &str) -> Result<Vec<u8>, BackendError> {
        self.record(BackendOp::Get(key.to_string()));
        if self
            .faults
            .lock()
            .get_prefixes
            .iter()
            .any(|p| key.starts_with(p.as_str()))
        {
            return Err(injected(key));
        }
        self.inner.get(ctx, key)
    }

    fn list_prefix(
        &self,
        ctx: &OpContext,
        prefix: &str,
        start_after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<String>, BackendError> {
        self.record(BackendOp::List {
            prefix: prefix.to_string(),
            start_after: start_after.map(str::to_string),
            limit,
        });
        let (fail, extra) = {
            let faults = self.faults.lock();
            (faults.fail_lists, faults.injected_keys.clone())
        };
        if fail {
            return Err(injected(prefix));
        }

        let mut keys = self.inner.list_prefix(ctx, prefix, start_after, limit)?;
        if !extra.is_empty() {
            keys.extend(
                extra
                    .into_iter()
                    .filter(|k| k.starts_with(prefix))
                    .filter(|k| start_after.map_or(true, |after| k.as_str() > after)),
            );
            keys.sort();
            keys.dedup();
            keys.truncate(limit);
        }
        Ok(keys)
    }
}
