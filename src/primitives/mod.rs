//! Primitive wrappers for the unified API.
//!
//! Each primitive follows the progressive disclosure pattern:
//!
//! 1. **Simple** - Background context: `vault.calls.insert(&call)`
//! 2. **Bounded** - Explicit context: `vault.calls.insert_with(&ctx, &call)`

mod calls;
mod logs;

pub use calls::Calls;
pub use logs::Logs;
