//! Core domain logic for LoreWiki.
//! This crate is the single source of truth for store, query, link and
//! session contracts; UI surfaces are thin consumers.

pub mod config;
pub mod link;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod storage;
pub mod store;

pub use config::{WikiConfig, SEED_FILE_NAME};
pub use link::resolver::{
    annotate_heading_anchors, classify_link_target, heading_slug, resolve, LinkResolveError,
    LinkTarget, Resolved,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{
    parse_category, parse_links_input, Article, ArticleDraft, ArticleKey,
    ArticleValidationError, Category,
};
pub use model::session::{Role, Session, UserAccount, SESSION_TTL_MS};
pub use query::search::{categorize, search, Categorized};
pub use service::auth_service::{AuthError, AuthResult, AuthService};
pub use service::wiki_service::{WikiService, WikiServiceError};
pub use storage::{
    FileLocalStore, LocalStore, MemoryLocalStore, StorageError, ARTICLES_ENTRY, SESSION_ENTRY,
};
pub use store::{load_seed, merge, ArticleStore, LoadError, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
