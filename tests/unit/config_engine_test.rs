//! Integration-level unit tests for the ConfigEngine public API.
//!
//! These tests exercise default loading, dot-path edits, `key=value`
//! assignments, and persistence through the `ConfigEngine` API.

use std::fs;

use biolingua::services::config_engine::{ConfigEngine, ConfigEngineTrait};
use biolingua::types::errors::ConfigError;
use biolingua::types::settings::{AppConfig, StorageBackendKind};
use tempfile::TempDir;

/// Helper: a ConfigEngine whose file lives in `dir`.
fn engine_in_temp(dir: &TempDir) -> ConfigEngine {
    let path = dir.path().join("config.json").to_string_lossy().to_string();
    ConfigEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let config = engine.load().unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.history.max_entries, 50);
    assert_eq!(config.history.history_key, "bioLinguaHistory");
    assert_eq!(config.history.favorites_key, "bioLinguaFavorites");
    assert_eq!(config.storage.backend, StorageBackendKind::Sqlite);
    assert!(!dir.path().join("config.json").exists(), "load must not write");
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("history.max_entries", serde_json::json!(20))
            .unwrap();
        engine
            .set_value("storage.backend", serde_json::json!("json_file"))
            .unwrap();
        engine
            .set_value("storage.path", serde_json::json!("/tmp/biolingua.json"))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let config = engine.load().unwrap();
    assert_eq!(config.history.max_entries, 20);
    assert_eq!(config.storage.backend, StorageBackendKind::JsonFile);
    assert_eq!(config.storage.path.as_deref(), Some("/tmp/biolingua.json"));
}

#[test]
fn test_set_value_rejects_unknown_and_empty_keys() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.set_value("history.nope", serde_json::json!(1)),
        Err(ConfigError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("nope.max_entries", serde_json::json!(1)),
        Err(ConfigError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(ConfigError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_rejects_wrong_type_and_keeps_config() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("history.max_entries", serde_json::json!("many"));
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

    let result = engine.set_value("storage.backend", serde_json::json!("redis"));
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

    assert_eq!(*engine.get_config(), AppConfig::default());
}

#[test]
fn test_apply_assignment_persists_unquoted_and_json_values() {
    let dir = TempDir::new().unwrap();
    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.apply_assignment("storage.backend=memory").unwrap();
        engine.apply_assignment("history.max_entries=7").unwrap();
        engine.apply_assignment("logging.filter=biolingua=debug").unwrap();
    }

    let config = engine_in_temp(&dir).load().unwrap();
    assert_eq!(config.storage.backend, StorageBackendKind::Memory);
    assert_eq!(config.history.max_entries, 7);
    assert_eq!(config.logging.filter, "biolingua=debug");
}

#[test]
fn test_apply_assignment_without_equals_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.apply_assignment("history.max_entries"),
        Err(ConfigError::InvalidKey(_))
    ));
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_save_replaces_file_without_leaving_temp() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), "{ stale }").unwrap();
    let mut engine = engine_in_temp(&dir);

    engine
        .set_value("logging.filter", serde_json::json!("warn"))
        .unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["config.json".to_string()]);
    assert_eq!(engine_in_temp(&dir).load().unwrap().logging.filter, "warn");
}

#[test]
fn test_load_unreadable_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("config.json")).unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(ConfigError::IoError(_))));
}

#[test]
fn test_load_malformed_json_is_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), "{ invalid json }").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.load(),
        Err(ConfigError::SerializationError(_))
    ));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("config.json");
    let engine = ConfigEngine::new(Some(path.to_string_lossy().to_string()));

    engine.save().unwrap();
    assert!(path.exists());
    assert_eq!(engine.get_config_path(), path.to_string_lossy());
}
