//! Durable key-value storage for BioLingua.
//!
//! A [`DurableStorage`] holds one serialized string per key. Three media are
//! provided: SQLite (default), a single JSON file, and process memory.
//! [`PersistentValue`] mirrors a typed value into one slot of any medium.

pub mod file;
pub mod memory;
pub mod persistent_value;
pub mod sqlite;

use std::path::PathBuf;
use std::rc::Rc;

use crate::platform;
use crate::types::errors::StorageError;
use crate::types::settings::{StorageBackendKind, StorageConfig};

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use persistent_value::PersistentValue;
pub use sqlite::SqliteStorage;

/// A per-user medium storing exactly one string value per key.
///
/// Absence of a key is a valid state and is reported as `Ok(None)`.
/// Implementations take `&self`; callers share a medium through `Rc`.
pub trait DurableStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Default file name for the given backend inside the platform data dir.
fn default_file_name(kind: StorageBackendKind) -> &'static str {
    match kind {
        StorageBackendKind::Sqlite => "biolingua.db",
        StorageBackendKind::JsonFile | StorageBackendKind::Memory => "storage.json",
    }
}

/// Resolves the on-disk location for file-based backends.
pub fn resolve_storage_path(config: &StorageConfig) -> PathBuf {
    match &config.path {
        Some(p) => PathBuf::from(p),
        None => platform::get_data_dir().join(default_file_name(config.backend)),
    }
}

/// Opens the medium selected by `config`.
///
/// # Errors
/// Returns `StorageError` if the SQLite database or its parent directory
/// cannot be created.
pub fn open_backend(config: &StorageConfig) -> Result<Rc<dyn DurableStorage>, StorageError> {
    match config.backend {
        StorageBackendKind::Memory => Ok(Rc::new(MemoryStorage::new())),
        StorageBackendKind::JsonFile => {
            Ok(Rc::new(JsonFileStorage::new(resolve_storage_path(config))))
        }
        StorageBackendKind::Sqlite => {
            let path = resolve_storage_path(config);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::IoError(format!("Failed to create data directory: {}", e))
                })?;
            }
            Ok(Rc::new(SqliteStorage::open(&path)?))
        }
    }
}
