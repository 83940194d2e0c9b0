//! Article store: seed dataset, overlay persistence and the merged mapping.
//!
//! # Responsibility
//! - Load the static seed mapping and the locally persisted overlay.
//! - Keep the merged in-memory mapping and write overlay changes back.
//!
//! # Invariants
//! - Overlay entries always win over seed entries with the same key.
//! - The persisted overlay holds only entries written through `put`, never
//!   the seed set.
//! - A corrupt overlay is discarded with a warning; only the seed path can
//!   fail a load.

use crate::model::article::{Article, ArticleKey};
use crate::storage::StorageError;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod article_store;
pub mod seed;

pub use article_store::ArticleStore;
pub use seed::load_seed;

pub type StoreResult<T> = Result<T, StoreError>;

/// Fatal failure while loading the static seed dataset.
///
/// Terminal for the session; callers surface it and offer a full reload.
#[derive(Debug)]
pub enum LoadError {
    SeedIo {
        path: PathBuf,
        source: std::io::Error,
    },
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SeedIo { path, source } => {
                write!(f, "failed to read seed dataset `{}`: {source}", path.display())
            }
            Self::SeedParse { path, source } => {
                write!(f, "malformed seed dataset `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SeedIo { source, .. } => Some(source),
            Self::SeedParse { source, .. } => Some(source),
        }
    }
}

/// Failure while writing an article through the store.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    OverlayEncode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::OverlayEncode(err) => write!(f, "failed to encode article overlay: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::OverlayEncode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Merges the overlay into the base mapping; overlay entries win by key.
///
/// Pure and idempotent: merging the same overlay twice yields the same
/// mapping as merging it once.
pub fn merge(
    base: BTreeMap<ArticleKey, Article>,
    overlay: &BTreeMap<ArticleKey, Article>,
) -> BTreeMap<ArticleKey, Article> {
    let mut merged = base;
    for (key, article) in overlay {
        merged.insert(key.clone(), article.clone());
    }
    merged
}
