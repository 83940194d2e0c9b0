//! Single-role session service.
//!
//! # Responsibility
//! - Gate writes behind the one hardcoded admin account.
//! - Persist and restore the session through the client-local store.
//!
//! # Invariants
//! - A failed login leaves the previous session untouched.
//! - Restore runs once at startup; expiry is never checked mid-session.
//! - A corrupt or stale persisted session is discarded, never an error.

use super::now_epoch_ms;
use crate::model::session::{Role, Session, UserAccount};
use crate::storage::{LocalStore, StorageError, SESSION_ENTRY};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

pub type AuthResult<T> = Result<T, AuthError>;

/// Login/logout failures.
#[derive(Debug)]
pub enum AuthError {
    /// Credentials did not match the admin account.
    InvalidCredentials,
    /// Session could not be encoded for persistence.
    Encode(serde_json::Error),
    /// Local store transport failure.
    Storage(StorageError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid username or password"),
            Self::Encode(err) => write!(f, "failed to encode session: {err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCredentials => None,
            Self::Encode(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for AuthError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Session state machine over a client-local store.
pub struct AuthService<S: LocalStore> {
    session: Session,
    local: S,
}

impl<S: LocalStore> AuthService<S> {
    /// Restores the persisted session, if any, applying the 24h expiry.
    pub fn restore(local: S) -> Self {
        Self::restore_at(local, now_epoch_ms())
    }

    /// Restore with an explicit clock. Discards (and removes) a persisted
    /// session that is missing a user, unparsable, or stale at `now_ms`.
    pub fn restore_at(mut local: S, now_ms: i64) -> Self {
        let raw = match local.get(SESSION_ENTRY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                return Self {
                    session: Session::anonymous(),
                    local,
                }
            }
            Err(err) => {
                warn!(
                    "event=session_restore module=auth status=error error_code=session_unreachable error={err}"
                );
                return Self {
                    session: Session::anonymous(),
                    local,
                };
            }
        };

        let parsed: Session = match serde_json::from_str(raw.as_str()) {
            Ok(session) => session,
            Err(err) => {
                warn!(
                    "event=session_restore module=auth status=error error_code=session_discarded error={err}"
                );
                let _ = local.remove(SESSION_ENTRY);
                return Self {
                    session: Session::anonymous(),
                    local,
                };
            }
        };

        if parsed.is_live_at(now_ms) {
            info!("event=session_restore module=auth status=ok");
            Self {
                session: parsed,
                local,
            }
        } else {
            info!("event=session_restore module=auth status=expired");
            let _ = local.remove(SESSION_ENTRY);
            Self {
                session: Session::anonymous(),
                local,
            }
        }
    }

    /// Logs in with the hardcoded admin credential pair.
    ///
    /// # Errors
    /// - [`AuthError::InvalidCredentials`] for any other pair; the previous
    ///   session is left unchanged.
    /// - [`AuthError::Storage`] when the session cannot be persisted.
    pub fn login(&mut self, username: &str, password: &str) -> AuthResult<()> {
        self.login_at(username, password, now_epoch_ms())
    }

    /// Login with an explicit login timestamp.
    pub fn login_at(&mut self, username: &str, password: &str, now_ms: i64) -> AuthResult<()> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            warn!("event=login module=auth status=denied");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::authenticated(UserAccount {
            username: ADMIN_USERNAME.to_string(),
            role: Role::Admin,
            login_timestamp_ms: now_ms,
        });
        let encoded = serde_json::to_string(&session).map_err(AuthError::Encode)?;
        self.local.set(SESSION_ENTRY, encoded.as_str())?;
        self.session = session;
        info!("event=login module=auth status=ok");
        Ok(())
    }

    /// Clears the session in memory and removes the persisted entry.
    pub fn logout(&mut self) -> AuthResult<()> {
        self.session = Session::anonymous();
        self.local.remove(SESSION_ENTRY)?;
        info!("event=logout module=auth status=ok");
        Ok(())
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Currently authenticated account, if any.
    pub fn current_user(&self) -> Option<&UserAccount> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    /// Authenticated with the admin role.
    ///
    /// With a single role in the system this reduces to the authenticated
    /// check, but the role comparison stays explicit.
    pub fn is_admin(&self) -> bool {
        self.session.is_authenticated
            && self
                .session
                .user
                .as_ref()
                .is_some_and(|user| user.role == Role::Admin)
    }

    pub fn can_edit(&self) -> bool {
        self.is_admin()
    }

    pub fn can_create(&self) -> bool {
        self.is_admin()
    }
}
