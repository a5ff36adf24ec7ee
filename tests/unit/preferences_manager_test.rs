//! Unit tests for the PreferencesManager (last-used explanation mode).

use std::rc::Rc;

use biolingua::managers::preferences_manager::{PreferencesManager, PreferencesManagerTrait};
use biolingua::storage::{DurableStorage, MemoryStorage};
use biolingua::types::history::ExplanationMode;
use biolingua::types::settings::DEFAULT_LAST_MODE_KEY;

#[test]
fn test_defaults_to_beginner() {
    let mgr = PreferencesManager::new(Rc::new(MemoryStorage::new()));
    assert_eq!(mgr.last_mode(), ExplanationMode::Beginner);
}

#[test]
fn test_set_last_mode_persists() {
    let storage = Rc::new(MemoryStorage::new());
    {
        let mut mgr = PreferencesManager::new(storage.clone());
        mgr.set_last_mode(&ExplanationMode::Advanced);
    }
    assert_eq!(
        storage.get_item(DEFAULT_LAST_MODE_KEY).unwrap().as_deref(),
        Some("\"Advanced\"")
    );
    assert_eq!(
        PreferencesManager::new(storage).last_mode(),
        ExplanationMode::Advanced
    );
}

#[test]
fn test_unchanged_mode_is_not_rewritten() {
    let storage = Rc::new(MemoryStorage::new());
    let mut mgr = PreferencesManager::new(storage.clone());
    mgr.set_last_mode(&ExplanationMode::Beginner);
    assert_eq!(storage.get_item(DEFAULT_LAST_MODE_KEY).unwrap(), None);
}

#[test]
fn test_custom_key() {
    let storage = Rc::new(MemoryStorage::new());
    let mut mgr = PreferencesManager::with_key(storage.clone(), "custom.mode");
    mgr.set_last_mode(&ExplanationMode::Advanced);
    assert!(storage.get_item("custom.mode").unwrap().is_some());
    assert_eq!(storage.get_item(DEFAULT_LAST_MODE_KEY).unwrap(), None);
}
