//! Use-case services over the store, query and auth layers.
//!
//! # Responsibility
//! - Orchestrate store/query/resolver calls into app-facing operations.
//! - Enforce the admin permission gate in front of every write.
//!
//! # Invariants
//! - Services never bypass store or model validation contracts.
//! - Time reads happen at the service edge; inner `_at` variants take an
//!   explicit `now_ms`.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod auth_service;
pub mod wiki_service;

/// Current wall-clock time in epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
