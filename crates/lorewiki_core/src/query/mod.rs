//! Read-side query entry points over the article store.
//!
//! # Responsibility
//! - Partition the store into the three fixed category buckets.
//! - Provide free-text substring search.

pub mod search;
