//! Merged article mapping with write-through overlay persistence.
//!
//! # Responsibility
//! - Hold the in-memory key -> article mapping built from seed + overlay.
//! - Write the full overlay back to the local store on every `put`.
//!
//! # Invariants
//! - Iteration order is the sorted key order of the merged mapping, stable
//!   for a given load result.
//! - `put` commits in-memory state only after the overlay write succeeded,
//!   so a failed write leaves the store unchanged.
//! - No authorization checks at this layer; callers enforce permission.

use super::{load_seed, merge, LoadError, StoreError, StoreResult};
use crate::model::article::{Article, ArticleKey};
use crate::storage::{LocalStore, ARTICLES_ENTRY};
use log::{info, warn};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::Path;

/// In-memory article mapping over a seed dataset and a persisted overlay.
pub struct ArticleStore<S: LocalStore> {
    articles: BTreeMap<ArticleKey, Article>,
    overlay: BTreeMap<ArticleKey, Article>,
    local: S,
}

impl<S: LocalStore> ArticleStore<S> {
    /// Loads the seed from disk, merges the persisted overlay in and
    /// returns the ready store.
    ///
    /// # Errors
    /// - [`LoadError`] when the seed is unreachable or malformed. Overlay
    ///   problems never fail a load; the overlay is discarded instead.
    pub fn load(seed_path: impl AsRef<Path>, local: S) -> Result<Self, LoadError> {
        let base = load_seed(seed_path)?;
        Ok(Self::from_seed(base, local))
    }

    /// Builds a store from an already-loaded seed mapping.
    ///
    /// Used by tests and probes that assemble the seed in memory.
    pub fn from_seed(base: BTreeMap<ArticleKey, Article>, local: S) -> Self {
        let overlay = read_overlay(&local);
        let articles = merge(base, &overlay);
        info!(
            "event=store_ready module=store status=ok article_count={} overlay_count={}",
            articles.len(),
            overlay.len()
        );
        Self {
            articles,
            overlay,
            local,
        }
    }

    /// Inserts or replaces an article under `key`, in memory and in the
    /// persisted overlay.
    ///
    /// The overlay is rewritten in full on every call; it only ever holds
    /// entries that went through this method.
    ///
    /// # Errors
    /// - [`StoreError`] when the overlay cannot be encoded or written. The
    ///   in-memory mapping is left untouched in that case.
    pub fn put(&mut self, key: ArticleKey, article: Article) -> StoreResult<()> {
        let mut next_overlay = self.overlay.clone();
        next_overlay.insert(key.clone(), article.clone());
        let encoded = serde_json::to_string(&next_overlay).map_err(StoreError::OverlayEncode)?;
        self.local.set(ARTICLES_ENTRY, encoded.as_str())?;

        self.overlay = next_overlay;
        self.articles.insert(key, article);
        info!(
            "event=article_put module=store status=ok article_count={} overlay_count={}",
            self.articles.len(),
            self.overlay.len()
        );
        Ok(())
    }

    /// Returns the article stored under `key`.
    pub fn get_by_key(&self, key: &str) -> Option<&Article> {
        self.articles.get(key)
    }

    /// Returns the key of the first article (iteration order) whose title
    /// equals `title` exactly.
    pub fn find_key_by_title(&self, title: &str) -> Option<&str> {
        self.articles
            .iter()
            .find(|(_, article)| article.title == title)
            .map(|(key, _)| key.as_str())
    }

    /// Iterates all entries in stable key order.
    pub fn iter(&self) -> btree_map::Iter<'_, ArticleKey, Article> {
        self.articles.iter()
    }

    /// Number of articles in the merged mapping.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Number of locally authored/edited entries.
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    /// Read access to the backing local store.
    pub fn local(&self) -> &S {
        &self.local
    }
}

/// Reads the persisted overlay; any failure degrades to an empty overlay.
fn read_overlay<S: LocalStore>(local: &S) -> BTreeMap<ArticleKey, Article> {
    let raw = match local.get(ARTICLES_ENTRY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BTreeMap::new(),
        Err(err) => {
            warn!(
                "event=overlay_load module=store status=error error_code=overlay_unreachable error={err}"
            );
            return BTreeMap::new();
        }
    };

    match serde_json::from_str(raw.as_str()) {
        Ok(overlay) => overlay,
        Err(err) => {
            warn!(
                "event=overlay_load module=store status=error error_code=overlay_discarded error={err}"
            );
            BTreeMap::new()
        }
    }
}
