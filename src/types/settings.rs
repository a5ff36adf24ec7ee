use serde::{Deserialize, Serialize};

/// Default number of history entries kept before the oldest are dropped.
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 50;

pub const DEFAULT_HISTORY_KEY: &str = "bioLinguaHistory";
pub const DEFAULT_FAVORITES_KEY: &str = "bioLinguaFavorites";
pub const DEFAULT_LAST_MODE_KEY: &str = "bioLinguaLastMode";

/// Top-level application configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

/// Which durable medium backs the persisted values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackendKind {
    #[default]
    Sqlite,
    JsonFile,
    Memory,
}

/// Durable storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageConfig {
    pub backend: StorageBackendKind,
    /// Overrides the platform data path for file-based backends.
    #[serde(default)]
    pub path: Option<String>,
}

/// History retention and storage-key settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    pub max_entries: usize,
    pub history_key: String,
    pub favorites_key: String,
    pub last_mode_key: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_HISTORY_ENTRIES,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            last_mode_key: DEFAULT_LAST_MODE_KEY.to_string(),
        }
    }
}

/// Log output settings. `RUST_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
