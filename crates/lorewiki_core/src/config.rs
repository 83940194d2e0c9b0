//! Explicit runtime configuration.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Conventional seed dataset file name under a wiki root.
pub const SEED_FILE_NAME: &str = "lorewiki_seed.json";

/// Paths and logging settings for one wiki instance.
///
/// A plain struct the embedding app fills and passes to
/// [`crate::service::wiki_service::WikiService::init`]; there is no config
/// file format.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// Static seed dataset location.
    pub seed_path: PathBuf,
    /// Directory backing the client-local entry store.
    pub data_dir: PathBuf,
    /// Log directory; `None` leaves logging uninitialized.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl WikiConfig {
    /// Derives the conventional layout under one root directory:
    /// `<root>/lorewiki_seed.json`, `<root>/data`, `<root>/logs`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            seed_path: root.join(SEED_FILE_NAME),
            data_dir: root.join("data"),
            log_dir: Some(root.join("logs")),
            log_level: default_log_level().to_string(),
        }
    }
}
