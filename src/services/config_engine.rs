//! Config file handling for BioLingua.
//!
//! `AppConfig` lives as pretty-printed JSON, by default at
//! `<platform config dir>/config.json`. Edits arrive as `key=value`
//! assignments on the command line and are written back to the file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::platform;
use crate::types::errors::ConfigError;
use crate::types::settings::AppConfig;

/// Trait defining the config engine interface.
pub trait ConfigEngineTrait {
    fn load(&mut self) -> Result<AppConfig, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn get_config(&self) -> &AppConfig;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), ConfigError>;
    fn get_config_path(&self) -> &str;
}

/// Config engine backed by one JSON file.
pub struct ConfigEngine {
    config_path: String,
    config: AppConfig,
}

impl ConfigEngine {
    /// Uses `path_override` when given, else `config.json` in the platform
    /// config directory. Nothing is read until [`ConfigEngineTrait::load`].
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("config.json")
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            config: AppConfig::default(),
        }
    }

    /// Applies one `key=value` assignment and saves.
    ///
    /// The value is read as JSON when it parses (`20`, `null`, `"x"`),
    /// otherwise as a bare string, so `storage.backend=memory` works unquoted.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (key, value) = parse_assignment(assignment)?;
        self.set_value(key, value)
    }
}

/// Splits `key=value` into the dot path and its JSON value.
pub fn parse_assignment(assignment: &str) -> Result<(&str, serde_json::Value), ConfigError> {
    let (key, raw) = assignment.split_once('=').ok_or_else(|| {
        ConfigError::InvalidKey(format!("Expected key=value, got '{}'", assignment))
    })?;
    let key = key.trim();
    let value = serde_json::from_str(raw.trim())
        .unwrap_or_else(|_| serde_json::Value::String(raw.trim().to_string()));
    Ok((key, value))
}

impl ConfigEngineTrait for ConfigEngine {
    /// A missing file yields the defaults and is not created.
    fn load(&mut self) -> Result<AppConfig, ConfigError> {
        self.config = match fs::read_to_string(&self.config_path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.config_path, "no config file, using defaults");
                AppConfig::default()
            }
            Err(e) => {
                return Err(ConfigError::IoError(format!("Failed to read config file: {}", e)))
            }
        };
        Ok(self.config.clone())
    }

    /// Writes a sibling `.tmp` file, then renames it over the config file.
    fn save(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.config).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        let mut tmp = PathBuf::from(&self.config_path);
        tmp.set_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))?;
        fs::rename(&tmp, path)
            .map_err(|e| ConfigError::IoError(format!("Failed to replace config file: {}", e)))
    }

    fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Replaces the value at a dot path (`history.max_entries`,
    /// `storage.backend`) and saves.
    ///
    /// Only existing keys can be set. The edited tree must still deserialize
    /// as `AppConfig`; if not, nothing changes.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), ConfigError> {
        let mut sections: Vec<&str> = key.split('.').collect();
        let field = sections
            .pop()
            .filter(|f| !f.is_empty())
            .ok_or_else(|| ConfigError::InvalidKey("Key cannot be empty".to_string()))?;

        let mut tree = serde_json::to_value(&self.config).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        let mut node = &mut tree;
        for section in sections {
            node = node
                .get_mut(section)
                .filter(|n| n.is_object())
                .ok_or_else(|| ConfigError::InvalidKey(format!("No config section for '{}'", key)))?;
        }
        match node.as_object_mut() {
            Some(map) if map.contains_key(field) => {
                map.insert(field.to_string(), value);
            }
            _ => return Err(ConfigError::InvalidKey(format!("Unknown config key '{}'", key))),
        }

        self.config = serde_json::from_value(tree).map_err(|e| {
            ConfigError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        debug!(key, "config value updated");
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
