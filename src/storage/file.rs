//! Single-file JSON storage medium.
//!
//! All keys live in one JSON object `{ "<key>": "<serialized value>" }`.
//! The file is rewritten on every `set_item` / `remove_item`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::DurableStorage;
use crate::types::errors::StorageError;

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole object. A missing file is an empty object.
    fn read_all(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::IoError(format!("Failed to read storage file: {}", e)))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            StorageError::SerializationError(format!("Failed to parse storage file: {}", e))
        })
    }

    fn write_all(&self, items: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::IoError(format!("Failed to create storage directory: {}", e))
            })?;
        }
        let json = serde_json::to_string_pretty(items).map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize storage file: {}", e))
        })?;
        fs::write(&self.path, json)
            .map_err(|e| StorageError::IoError(format!("Failed to write storage file: {}", e)))
    }
}

impl DurableStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.read_all()?;
        match items.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            // Hand-edited files may hold the value unquoted; hand back its JSON text.
            Some(other) => Ok(Some(other.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}
