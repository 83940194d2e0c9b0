//! Wiki application context and write operations.
//!
//! # Responsibility
//! - Own the article store and session service as one explicit context
//!   object, initialized once at app start.
//! - Enforce the admin gate and stamping rules around article writes.
//!
//! # Invariants
//! - Create derives the key from the trimmed title and never stamps
//!   modification metadata; only edits stamp `last_modified`/`modified_by`.
//! - Every rejected operation leaves store and session unchanged.

use super::auth_service::{AuthResult, AuthService};
use super::now_epoch_ms;
use crate::config::WikiConfig;
use crate::link::resolver::{self, LinkResolveError, Resolved};
use crate::model::article::{Article, ArticleDraft, ArticleKey, ArticleValidationError};
use crate::model::session::UserAccount;
use crate::query::search::{self, Categorized};
use crate::storage::{FileLocalStore, LocalStore};
use crate::store::{ArticleStore, LoadError, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failures of the app-facing write operations.
#[derive(Debug)]
pub enum WikiServiceError {
    /// Caller is not logged in as admin. Carries the operation name.
    NotAuthorized(&'static str),
    Validation(ArticleValidationError),
    /// Edit target key does not exist in the store.
    UnknownArticle(String),
    Store(StoreError),
}

impl Display for WikiServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthorized(operation) => {
                write!(f, "admin login required to {operation} articles")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownArticle(key) => write!(f, "no article stored under key `{key}`"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WikiServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotAuthorized(_) => None,
            Self::Validation(err) => Some(err),
            Self::UnknownArticle(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ArticleValidationError> for WikiServiceError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for WikiServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// App context: merged article store plus the admin session.
pub struct WikiService<S: LocalStore> {
    store: ArticleStore<S>,
    auth: AuthService<S>,
}

impl WikiService<FileLocalStore> {
    /// Initializes the context from configuration: seed load, overlay
    /// merge and session restore.
    ///
    /// # Errors
    /// - [`LoadError`] when the seed dataset is unreachable or malformed.
    ///   Terminal for this session; a full re-init is the only retry.
    pub fn init(config: &WikiConfig) -> Result<Self, LoadError> {
        let store = ArticleStore::load(
            config.seed_path.as_path(),
            FileLocalStore::new(config.data_dir.as_path()),
        )?;
        let auth = AuthService::restore(FileLocalStore::new(config.data_dir.as_path()));
        info!("event=wiki_init module=service status=ok");
        Ok(Self { store, auth })
    }
}

impl<S: LocalStore> WikiService<S> {
    /// Assembles a context from already-built parts.
    pub fn new(store: ArticleStore<S>, auth: AuthService<S>) -> Self {
        Self { store, auth }
    }

    /// Creates a new article from a submitted draft.
    ///
    /// The key is the trimmed title. No modification stamps are written;
    /// those appear on the first edit.
    ///
    /// # Errors
    /// - [`WikiServiceError::NotAuthorized`] without an admin session.
    /// - [`WikiServiceError::Validation`] when title or content trim to
    ///   empty.
    /// - [`WikiServiceError::Store`] when the overlay write fails.
    pub fn create_article(
        &mut self,
        draft: &ArticleDraft,
    ) -> Result<(ArticleKey, Article), WikiServiceError> {
        if !self.auth.can_create() {
            return Err(WikiServiceError::NotAuthorized("create"));
        }

        let article = Article::new(
            draft.title.trim(),
            draft.content.trim(),
            draft.category,
            draft.links(),
        );
        article.validate()?;

        let key: ArticleKey = article.title.clone();
        self.store.put(key.clone(), article.clone())?;
        info!("event=article_create module=service status=ok");
        Ok((key, article))
    }

    /// Replaces the article under an existing key with the submitted
    /// draft, stamping `last_modified` and `modified_by`.
    ///
    /// # Errors
    /// - [`WikiServiceError::NotAuthorized`] without an admin session.
    /// - [`WikiServiceError::UnknownArticle`] when `key` is not stored.
    /// - [`WikiServiceError::Validation`] when title or content trim to
    ///   empty.
    /// - [`WikiServiceError::Store`] when the overlay write fails.
    pub fn update_article(
        &mut self,
        key: &str,
        draft: &ArticleDraft,
    ) -> Result<Article, WikiServiceError> {
        self.update_article_at(key, draft, now_epoch_ms())
    }

    /// Update with an explicit modification timestamp.
    pub fn update_article_at(
        &mut self,
        key: &str,
        draft: &ArticleDraft,
        now_ms: i64,
    ) -> Result<Article, WikiServiceError> {
        if !self.auth.can_edit() {
            return Err(WikiServiceError::NotAuthorized("edit"));
        }
        if self.store.get_by_key(key).is_none() {
            return Err(WikiServiceError::UnknownArticle(key.to_string()));
        }

        let mut article = Article::new(
            draft.title.trim(),
            draft.content.trim(),
            draft.category,
            draft.links(),
        );
        article.validate()?;
        article.last_modified = Some(now_ms);
        article.modified_by = self
            .auth
            .current_user()
            .map(|user| user.username.clone());

        self.store.put(key.to_string(), article.clone())?;
        info!("event=article_update module=service status=ok");
        Ok(article)
    }

    /// Store entries partitioned into the three category buckets.
    pub fn categorized(&self) -> Categorized<'_> {
        search::categorize(&self.store)
    }

    /// Free-text substring search over titles and content.
    pub fn search(&self, query: &str) -> Vec<&Article> {
        search::search(&self.store, query)
    }

    /// Resolves a link label to a stored article.
    pub fn resolve_link(&self, label: &str) -> Result<Resolved<'_>, LinkResolveError> {
        resolver::resolve(&self.store, label)
    }

    /// Returns the article stored under `key`.
    pub fn article(&self, key: &str) -> Option<&Article> {
        self.store.get_by_key(key)
    }

    /// Returns the key of the first article with this exact title.
    pub fn key_for_title(&self, title: &str) -> Option<&str> {
        self.store.find_key_by_title(title)
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ArticleStore<S> {
        &self.store
    }

    pub fn login(&mut self, username: &str, password: &str) -> AuthResult<()> {
        self.auth.login(username, password)
    }

    pub fn logout(&mut self) -> AuthResult<()> {
        self.auth.logout()
    }

    pub fn can_edit(&self) -> bool {
        self.auth.can_edit()
    }

    pub fn can_create(&self) -> bool {
        self.auth.can_create()
    }

    pub fn current_user(&self) -> Option<&UserAccount> {
        self.auth.current_user()
    }

    /// Access to the session service for login-flow callers.
    pub fn auth(&mut self) -> &mut AuthService<S> {
        &mut self.auth
    }
}
