//! Session domain model.
//!
//! # Responsibility
//! - Define the persisted session shape and its freshness rule.
//!
//! # Invariants
//! - There is exactly one role in the system; "guest" is the absence of a
//!   session, not a role value.
//! - A session is live only while `now - login_timestamp < 24h`.

use serde::{Deserialize, Serialize};

/// Maximum session age before a persisted session is discarded at load.
pub const SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// The only role the system knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
}

/// Authenticated account data stamped at login time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    pub role: Role,
    /// Epoch milliseconds of the successful login.
    #[serde(rename = "loginTimestamp")]
    pub login_timestamp_ms: i64,
}

/// Session state as persisted to the client-local store.
///
/// The explicit `is_authenticated` flag is part of the wire shape; the
/// constructors keep it consistent with `user`, and restore paths treat any
/// mismatch as an invalid session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    pub user: Option<UserAccount>,
}

impl Session {
    /// Logged-out state.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Logged-in state for the given account.
    pub fn authenticated(user: UserAccount) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// Whether this session should survive a restore at `now_ms`.
    ///
    /// Requires a consistent authenticated shape and a login timestamp
    /// younger than [`SESSION_TTL_MS`].
    pub fn is_live_at(&self, now_ms: i64) -> bool {
        if !self.is_authenticated {
            return false;
        }
        match self.user.as_ref() {
            Some(user) => now_ms - user.login_timestamp_ms < SESSION_TTL_MS,
            None => false,
        }
    }
}
