//! Category partitioning and free-text search.
//!
//! # Responsibility
//! - Partition store entries by recognized category.
//! - Match articles by case-insensitive substring over title and content.
//!
//! # Invariants
//! - Articles with an unrecognized category land in no bucket; this is a
//!   silent drop, not an error.
//! - A query that trims to empty returns no results, never the full store.
//! - Result order is store iteration order; there is no ranking.

use crate::model::article::{Article, Category};
use crate::storage::LocalStore;
use crate::store::ArticleStore;

/// Store entries partitioned into the three recognized buckets.
#[derive(Debug, Default)]
pub struct Categorized<'a> {
    pub primary: Vec<&'a Article>,
    pub sections: Vec<&'a Article>,
    pub auxiliary: Vec<&'a Article>,
}

impl<'a> Categorized<'a> {
    /// Total number of articles across all buckets.
    ///
    /// Smaller than the store size when unrecognized categories exist.
    pub fn total(&self) -> usize {
        self.primary.len() + self.sections.len() + self.auxiliary.len()
    }
}

/// Partitions all store entries by parsed category.
pub fn categorize<S: LocalStore>(store: &ArticleStore<S>) -> Categorized<'_> {
    let mut categorized = Categorized::default();
    for (_, article) in store.iter() {
        match article.category_kind() {
            Some(Category::Primary) => categorized.primary.push(article),
            Some(Category::Sections) => categorized.sections.push(article),
            Some(Category::Auxiliary) => categorized.auxiliary.push(article),
            None => {}
        }
    }
    categorized
}

/// Returns all articles whose title or content contains `query`
/// case-insensitively, in store iteration order.
///
/// The emptiness check uses the trimmed query, but the match itself uses
/// the query as typed (lowercased, whitespace included).
pub fn search<'a, S: LocalStore>(store: &'a ArticleStore<S>, query: &str) -> Vec<&'a Article> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    store
        .iter()
        .map(|(_, article)| article)
        .filter(|article| {
            article.title.to_lowercase().contains(needle.as_str())
                || article.content.to_lowercase().contains(needle.as_str())
        })
        .collect()
}
