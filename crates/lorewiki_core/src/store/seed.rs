//! Seed dataset loading.
//!
//! # Responsibility
//! - Read and parse the static key -> article JSON mapping fetched once at
//!   startup.
//! - Emit `seed_load` events with duration and status.
//!
//! # Invariants
//! - Any read or parse failure is a fatal [`LoadError`]; there is no retry.

use super::LoadError;
use crate::model::article::{Article, ArticleKey};
use log::{error, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Loads the seed mapping from a JSON document on disk.
///
/// # Errors
/// - [`LoadError::SeedIo`] when the file cannot be read.
/// - [`LoadError::SeedParse`] when the document is not a valid key ->
///   article mapping.
pub fn load_seed(path: impl AsRef<Path>) -> Result<BTreeMap<ArticleKey, Article>, LoadError> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=seed_load module=store status=start");

    let raw = fs::read_to_string(path).map_err(|err| {
        error!(
            "event=seed_load module=store status=error duration_ms={} error_code=seed_unreachable error={}",
            started_at.elapsed().as_millis(),
            err
        );
        LoadError::SeedIo {
            path: path.to_path_buf(),
            source: err,
        }
    })?;

    let articles: BTreeMap<ArticleKey, Article> =
        serde_json::from_str(raw.as_str()).map_err(|err| {
            error!(
                "event=seed_load module=store status=error duration_ms={} error_code=seed_malformed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            LoadError::SeedParse {
                path: path.to_path_buf(),
                source: err,
            }
        })?;

    info!(
        "event=seed_load module=store status=ok duration_ms={} article_count={}",
        started_at.elapsed().as_millis(),
        articles.len()
    );
    Ok(articles)
}
