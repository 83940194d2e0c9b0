//! Client-local key-value storage.
//!
//! # Responsibility
//! - Abstract the per-entry string storage used for the article overlay and
//!   the persisted session.
//! - Provide a file-backed implementation plus an in-memory one for tests
//!   and read-only probes.
//!
//! # Invariants
//! - Reading a missing entry yields `Ok(None)`, never an error.
//! - Removing a missing entry is a no-op.
//! - Entry payloads are opaque strings; JSON encoding belongs to callers.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Entry holding the JSON-encoded article overlay mapping.
pub const ARTICLES_ENTRY: &str = "lorewiki-articles";
/// Entry holding the JSON-encoded session object.
pub const SESSION_ENTRY: &str = "lorewiki-session";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport failure of the local store.
#[derive(Debug)]
pub enum StorageError {
    Io {
        entry: String,
        source: io::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { entry, source } => {
                write!(f, "local store entry `{entry}` failed: {source}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Per-entry string storage contract.
pub trait LocalStore {
    /// Returns the entry payload, or `None` when the entry was never set.
    fn get(&self, entry: &str) -> StorageResult<Option<String>>;
    /// Writes the full entry payload, replacing any previous value.
    fn set(&mut self, entry: &str, value: &str) -> StorageResult<()>;
    /// Deletes the entry. Absent entries are tolerated.
    fn remove(&mut self, entry: &str) -> StorageResult<()>;
}

/// One-file-per-entry store rooted at a data directory.
///
/// The directory is created lazily on first write, so a read-only consumer
/// never touches the filesystem.
#[derive(Debug, Clone)]
pub struct FileLocalStore {
    root: PathBuf,
}

impl FileLocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, entry: &str) -> PathBuf {
        self.root.join(format!("{entry}.json"))
    }

    fn io_error(entry: &str, source: io::Error) -> StorageError {
        StorageError::Io {
            entry: entry.to_string(),
            source,
        }
    }
}

impl LocalStore for FileLocalStore {
    fn get(&self, entry: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.entry_path(entry)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(entry, err)),
        }
    }

    fn set(&mut self, entry: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.root).map_err(|err| Self::io_error(entry, err))?;
        fs::write(self.entry_path(entry), value).map_err(|err| Self::io_error(entry, err))
    }

    fn remove(&mut self, entry: &str) -> StorageResult<()> {
        match fs::remove_file(self.entry_path(entry)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error(entry, err)),
        }
    }
}

/// In-memory store for tests and read-only probes.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocalStore {
    entries: BTreeMap<String, String>,
}

impl MemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocalStore for MemoryLocalStore {
    fn get(&self, entry: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(entry).cloned())
    }

    fn set(&mut self, entry: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(entry.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, entry: &str) -> StorageResult<()> {
        self.entries.remove(entry);
        Ok(())
    }
}
