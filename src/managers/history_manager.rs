//! History Manager for BioLingua.
//!
//! Implements `HistoryManagerTrait`: recording query results, duplicate
//! lookup, favorites, and clearing. The log and the favorite set are two
//! independently persisted values over a shared [`DurableStorage`].

use std::rc::Rc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::storage::{DurableStorage, PersistentValue};
use crate::types::history::{normalize_query, ExplanationMode, HistoryEntry, ResultPayload};
use crate::types::settings::HistoryConfig;
use crate::util::now_millis;

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn find_existing(&self, query_input: &str, mode: &ExplanationMode) -> Option<HistoryEntry>;
    fn record(&mut self, query_input: &str, mode: ExplanationMode, results: ResultPayload) -> HistoryEntry;
    fn toggle_favorite(&mut self, id: &str);
    fn clear_history(&mut self);
    fn clear_favorites(&mut self);
    fn list_favorites(&self) -> Vec<HistoryEntry>;
    fn list_history(&self) -> Vec<HistoryEntry>;
    fn get_entry(&self, id: &str) -> Option<HistoryEntry>;
    fn is_favorite(&self, id: &str) -> bool;
    /// Raw favorite ids, including ones whose entry is gone.
    fn favorite_ids(&self) -> Vec<String>;
}

/// History manager over a durable storage medium.
pub struct HistoryManager {
    history: PersistentValue<Vec<HistoryEntry>>,
    favorites: PersistentValue<Vec<String>>,
    max_entries: usize,
}

impl HistoryManager {
    /// Creates a `HistoryManager` with the default keys and a 50-entry cap,
    /// hydrated from `storage`.
    pub fn new(storage: Rc<dyn DurableStorage>) -> Self {
        Self::with_config(storage, &HistoryConfig::default())
    }

    /// Creates a `HistoryManager` using the keys and cap from `config`.
    ///
    /// A cap of zero is raised to one so a recorded entry is always retained.
    pub fn with_config(storage: Rc<dyn DurableStorage>, config: &HistoryConfig) -> Self {
        let history: PersistentValue<Vec<HistoryEntry>> =
            PersistentValue::open(storage.clone(), config.history_key.as_str(), Vec::new());
        let favorites: PersistentValue<Vec<String>> =
            PersistentValue::open(storage, config.favorites_key.as_str(), Vec::new());
        debug!(
            entries = history.get().len(),
            favorites = favorites.get().len(),
            "history manager hydrated"
        );
        Self {
            history,
            favorites,
            max_entries: config.max_entries.max(1),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.history.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.get().is_empty()
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Returns the newest entry whose trimmed, lowercased input and mode match.
    fn find_existing(&self, query_input: &str, mode: &ExplanationMode) -> Option<HistoryEntry> {
        let needle = normalize_query(query_input);
        self.history
            .get()
            .iter()
            .find(|e| e.mode == *mode && normalize_query(&e.query_input) == needle)
            .cloned()
    }

    /// Prepends a new entry and drops the oldest ones beyond the cap.
    ///
    /// Does not check for duplicates; callers look up with `find_existing` first.
    fn record(&mut self, query_input: &str, mode: ExplanationMode, results: ResultPayload) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: now_millis(),
            query_input: query_input.trim().to_string(),
            mode,
            results,
        };

        let max = self.max_entries;
        let inserted = entry.clone();
        self.history.update(move |prev| {
            let mut next = Vec::with_capacity((prev.len() + 1).min(max));
            next.push(inserted);
            next.extend(prev.iter().take(max - 1).cloned());
            next
        });

        debug!(id = %entry.id, mode = entry.mode.as_str(), "recorded history entry");
        entry
    }

    fn toggle_favorite(&mut self, id: &str) {
        self.favorites.update(|prev| {
            if prev.iter().any(|f| f == id) {
                prev.iter().filter(|f| f.as_str() != id).cloned().collect()
            } else {
                let mut next = prev.clone();
                next.push(id.to_string());
                next
            }
        });
    }

    /// Empties the log, then drops favorites that pointed into it.
    ///
    /// Favorite ids not present in the log at this point are kept.
    fn clear_history(&mut self) {
        let cleared: Vec<String> = self.history.get().iter().map(|e| e.id.clone()).collect();
        self.history.set(Vec::new());
        self.favorites.update(|prev| {
            prev.iter()
                .filter(|f| !cleared.contains(f))
                .cloned()
                .collect()
        });
        info!(entries = cleared.len(), "history cleared");
    }

    fn clear_favorites(&mut self) {
        self.favorites.set(Vec::new());
        info!("favorites cleared");
    }

    /// Favorited entries in log order. Ids with no live entry are skipped.
    fn list_favorites(&self) -> Vec<HistoryEntry> {
        let favorites = self.favorites.get();
        self.history
            .get()
            .iter()
            .filter(|e| favorites.contains(&e.id))
            .cloned()
            .collect()
    }

    fn list_history(&self) -> Vec<HistoryEntry> {
        self.history.get().clone()
    }

    fn get_entry(&self, id: &str) -> Option<HistoryEntry> {
        self.history.get().iter().find(|e| e.id == id).cloned()
    }

    fn is_favorite(&self, id: &str) -> bool {
        self.favorites.get().iter().any(|f| f == id)
    }

    fn favorite_ids(&self) -> Vec<String> {
        self.favorites.get().clone()
    }
}
