//! Per-operation cancellation and deadlines
//!
//! One [`OpContext`] spans one logical operation (an insert, a get, one
//! listing page). The engine checks it before every backend call and hands
//! the same context to the backend, so a cancelled or expired operation
//! stops issuing I/O at the next call boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why an operation stopped before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Interrupted {
    /// A [`CancelHandle`] was triggered
    #[error("operation cancelled")]
    Cancelled,
    /// The context deadline passed
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation and deadline scope for one logical operation.
///
/// Cloning is cheap; clones share the cancel flag.
#[derive(Debug, Clone, Default)]
pub struct OpContext {
    deadline: Option<Instant>,
    cancelled: Option<Arc<AtomicBool>>,
}

impl OpContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline(Instant::now() + timeout)
    }

    /// Set (or tighten) the deadline.
    ///
    /// An existing earlier deadline is kept.
    pub fn deadline(mut self, at: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(at),
            None => at,
        });
        self
    }

    /// Attach a cancel flag and return the handle that triggers it.
    pub fn cancellable(mut self) -> (Self, CancelHandle) {
        let flag = self
            .cancelled
            .get_or_insert_with(|| Arc::new(AtomicBool::new(false)))
            .clone();
        (self, CancelHandle { flag })
    }

    /// Time left before the deadline, if one is set.
    ///
    /// Returns `Some(Duration::ZERO)` once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    /// Fail if the context was cancelled or its deadline passed.
    pub fn check(&self) -> Result<(), Interrupted> {
        if let Some(flag) = &self.cancelled {
            if flag.load(Ordering::Acquire) {
                return Err(Interrupted::Cancelled);
            }
        }
        if let Some(at) = self.deadline {
            if Instant::now() >= at {
                return Err(Interrupted::DeadlineExceeded);
            }
        }
        Ok(())
    }
}

/// Triggers cancellation of every [`OpContext`] sharing its flag.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Cancel the associated operation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Check whether cancel has been called.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
