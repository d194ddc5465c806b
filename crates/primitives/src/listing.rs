//! List/cursor engine
//!
//! Serves one page of a [`CallFilter`] from an ascending-only prefix listing.
//!
//! ## Algorithm
//!
//! ```text
//! 1. validate filter                       (InvalidFilter before any I/O)
//! 2. root  = calls/<app>/ | markers/<app>/<path64>/
//! 3. start = root + frag(cursor)
//!            max root + timefrag(to_time)         (seek_to_time only)
//! 4. keys  = list_prefix(root, start, page_size)      newest first
//! 5. per key: decode (InvalidKey aborts)
//!             stop if id time < from_time             (time_seek, approximate)
//!             fetch primary (missing => skip)
//!             skip unless app/path match the filter
//!             skip unless from_time <= created_at < to_time
//! 6. next cursor = last decoded id, unless exhausted
//! ```
//!
//! ## Time bounds
//!
//! Listing is newest first, so `to_time` is the bound met at the start of
//! the scan and `from_time` the bound met at its end. The per-record check in
//! step 5 alone decides inclusion; the options below only shorten the scan,
//! using the time embedded in ids (see [`callvault_core::seek`]):
//!
//! | Option | Bound | Effect |
//! |--------|-------|--------|
//! | `time_seek` (on) | `from_time` | stop once ids are older |
//! | `seek_to_time` (off) | `to_time` | start after newer ids |
//!
//! Both are exact only when ids embed `created_at` to the millisecond.

use crate::call_store::CallStore;
use crate::options::CallStoreOptions;
use callvault_core::keys::{self, KeySpace};
use callvault_core::seek;
use callvault_core::{CallFilter, CallId, CallPage, CallRecord, Error, OpContext, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, error};

/// Where the scan for one page begins and ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanPlan {
    pub(crate) space: KeySpace,
    pub(crate) root: String,
    pub(crate) start_after: Option<String>,
    /// Stop once a listed id's embedded time is older than this.
    pub(crate) stop_before_millis: Option<u64>,
    pub(crate) limit: usize,
}

impl ScanPlan {
    pub(crate) fn for_filter(filter: &CallFilter, options: &CallStoreOptions) -> Self {
        let (space, root) = match &filter.path {
            Some(path) => (KeySpace::Markers, keys::markers_root(&filter.app_id, path)),
            None => (KeySpace::Calls, keys::calls_root(&filter.app_id)),
        };

        let cursor_key = filter
            .cursor
            .map(|id| format!("{root}{}", keys::descending_fragment(&id)));
        let seek_key = filter
            .to_time
            .filter(|_| options.seek_to_time)
            .and_then(seek::time_fragment)
            .map(|frag| format!("{root}{frag}"));
        // Both are exclusive lower bounds on the same key space; the larger
        // one skips more.
        let start_after = match (cursor_key, seek_key) {
            (Some(c), Some(s)) => Some(c.max(s)),
            (c, s) => c.or(s),
        };

        let stop_before_millis = filter
            .from_time
            .filter(|_| options.time_seek)
            .and_then(seek::bound_millis);

        Self {
            space,
            root,
            start_after,
            stop_before_millis,
            limit: filter.page_size.min(options.max_page_size).max(1),
        }
    }
}

// A marker can outlive an overwrite of its call under another path.
fn addressed_by(filter: &CallFilter, record: &CallRecord) -> bool {
    record.app_id == filter.app_id
        && filter.path.as_ref().map_or(true, |path| record.path == *path)
}

fn in_window(filter: &CallFilter, created_at: DateTime<Utc>) -> bool {
    if matches!(filter.from_time, Some(from) if created_at < from) {
        return false;
    }
    if matches!(filter.to_time, Some(to) if created_at >= to) {
        return false;
    }
    true
}

impl CallStore {
    /// List one page of calls matching `filter`, newest first.
    ///
    /// Pass the returned `next_cursor` back as `filter.cursor` to continue.
    /// A page can be short or empty while more results remain (skipped
    /// records still advance the cursor); iteration is complete when
    /// `next_cursor` is `None`.
    ///
    /// # Errors
    ///
    /// - `InvalidFilter` for an empty app id, a zero page size or an
    ///   inverted time window; no backend call is made
    /// - `InvalidKey` when a listed key does not decode under the namespace
    ///   schema; the whole page is abandoned
    /// - backend failures other than a missing record, unmodified
    pub fn list_calls(&self, ctx: &OpContext, filter: &CallFilter) -> Result<CallPage> {
        filter.validate()?;
        let plan = ScanPlan::for_filter(filter, &self.options);

        ctx.check()?;
        debug!(
            app_id = %filter.app_id,
            prefix = %plan.root,
            start_after = ?plan.start_after,
            limit = plan.limit,
            "Listing calls"
        );
        let listed = self
            .store
            .list_prefix(ctx, &plan.root, plan.start_after.as_deref(), plan.limit)?;

        let mut calls = Vec::with_capacity(listed.len().min(plan.limit));
        let mut last: Option<CallId> = None;
        let mut exhausted = listed.len() < plan.limit;

        for raw in listed.iter().take(plan.limit) {
            let id = self.decode_listed(raw, &plan, filter)?;
            last = Some(id);

            if matches!(plan.stop_before_millis, Some(stop) if id.timestamp_millis() < stop) {
                exhausted = true;
                break;
            }

            let primary = keys::encode_primary_key(&filter.app_id, &id);
            let record = match self.fetch(ctx, &primary) {
                Ok(record) => record,
                Err(Error::NotFound(_)) => {
                    debug!(
                        app_id = %filter.app_id,
                        call_id = %id,
                        key = %raw,
                        "Listed call vanished before fetch; skipping"
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

            if !addressed_by(filter, &record) {
                debug!(
                    app_id = %filter.app_id,
                    call_id = %id,
                    key = %raw,
                    path = %record.path,
                    "Listed call was rewritten under another path; skipping"
                );
                continue;
            }

            if in_window(filter, record.created_at) {
                calls.push(record);
            }
        }

        Ok(CallPage {
            calls,
            next_cursor: if exhausted { None } else { last },
        })
    }

    /// List every matching call by following cursors to the end.
    ///
    /// Convenience for tooling and tests; each page is a separate logical
    /// operation under the same `ctx`.
    pub fn list_all_calls(&self, ctx: &OpContext, filter: &CallFilter) -> Result<Vec<CallRecord>> {
        let mut filter = filter.clone();
        let mut out = Vec::new();
        loop {
            let page = self.list_calls(ctx, &filter)?;
            out.extend(page.calls);
            match page.next_cursor {
                Some(cursor) => filter.cursor = Some(cursor),
                None => return Ok(out),
            }
        }
    }

    fn decode_listed(&self, raw: &str, plan: &ScanPlan, filter: &CallFilter) -> Result<CallId> {
        let decoded = keys::decode_key(raw, plan.space).and_then(|(app, id)| {
            if raw.starts_with(&plan.root) && app == filter.app_id {
                Ok(id)
            } else {
                Err(Error::invalid_key(raw, "key is outside the listed namespace"))
            }
        });
        if let Err(e) = &decoded {
            error!(
                app_id = %filter.app_id,
                key = %raw,
                error = %e,
                "Invalid key in call listing"
            );
        }
        decoded
    }
}
