//! I/O boundary traits for testability
//!
//! The snapshot repository abstracts where the taxonomy is mirrored between
//! invocations. The engine never depends on it; a load replays every row
//! through the domain layer so invariants are enforced, not trusted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Category, DomainError, HierarchyStore};

/// Errors raised at the storage boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("{0}")]
    Domain(#[from] DomainError),
}

impl StorageError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Snapshot repository abstraction.
pub trait StoreRepository: Send + Sync {
    /// Load the persisted hierarchy. A missing snapshot is an empty store.
    fn load(&self) -> StorageResult<HierarchyStore>;

    /// Persist the full hierarchy, keyed by id, in insertion order.
    fn save(&self, store: &HierarchyStore) -> StorageResult<()>;
}

/// On-disk snapshot document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Real repository persisting the hierarchy as a TOML snapshot.
///
/// Row order in the file is the store's insertion order, which guarantees a
/// parent row always precedes its children on reload.
#[derive(Debug, Clone)]
pub struct TomlStoreRepository {
    path: PathBuf,
}

impl TomlStoreRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreRepository for TomlStoreRepository {
    fn load(&self) -> StorageResult<HierarchyStore> {
        if !self.path.exists() {
            debug!("no snapshot at {}, starting empty", self.path.display());
            return Ok(HierarchyStore::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StorageError::io(format!("read snapshot {}", self.path.display()), e))?;

        let snapshot: Snapshot =
            toml::from_str(&content).map_err(|e| StorageError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let store = HierarchyStore::restore(snapshot.categories)?;
        debug!(
            "loaded {} categories from {}",
            store.len(),
            self.path.display()
        );
        Ok(store)
    }

    fn save(&self, store: &HierarchyStore) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::io(format!("create snapshot dir {}", parent.display()), e)
                })?;
            }
        }

        let snapshot = Snapshot {
            categories: store.categories().cloned().collect(),
        };
        let content = toml::to_string_pretty(&snapshot).map_err(|e| StorageError::Malformed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        std::fs::write(&self.path, content)
            .map_err(|e| StorageError::io(format!("write snapshot {}", self.path.display()), e))?;
        debug!(
            "saved {} categories to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }
}
