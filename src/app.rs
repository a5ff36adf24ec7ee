//! App Core for BioLingua.
//!
//! Holds the config, the durable storage medium, and the managers built on
//! it, and implements the submit flow: reuse a matching history entry or ask
//! the AI collaborator and record its result.

use std::rc::Rc;

use tracing::{info, warn};

use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::preferences_manager::{PreferencesManager, PreferencesManagerTrait};
use crate::storage::{self, DurableStorage, MemoryStorage};
use crate::types::history::{ExplanationMode, HistoryEntry, ResultPayload};
use crate::types::settings::AppConfig;

/// Outcome of [`App::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A matching entry already existed; the collaborator was not called.
    Reused(HistoryEntry),
    /// The collaborator produced a fresh result, now at the head of the log.
    Recorded(HistoryEntry),
}

impl Submission {
    pub fn entry(&self) -> &HistoryEntry {
        match self {
            Submission::Reused(e) | Submission::Recorded(e) => e,
        }
    }

    pub fn is_reused(&self) -> bool {
        matches!(self, Submission::Reused(_))
    }
}

/// Central application struct.
pub struct App {
    pub config: AppConfig,
    pub history: HistoryManager,
    pub preferences: PreferencesManager,
    storage: Rc<dyn DurableStorage>,
}

impl App {
    /// Opens the medium named in `config` and hydrates the managers from it.
    ///
    /// If the medium cannot be opened the app runs on in-memory storage for
    /// this session.
    pub fn new(config: AppConfig) -> Self {
        let storage = match storage::open_backend(&config.storage) {
            Ok(storage) => storage,
            Err(e) => {
                warn!(error = %e, "durable storage unavailable, history will not persist");
                Rc::new(MemoryStorage::new()) as Rc<dyn DurableStorage>
            }
        };
        Self::with_storage(config, storage)
    }

    /// Builds the app over an already opened medium.
    pub fn with_storage(config: AppConfig, storage: Rc<dyn DurableStorage>) -> Self {
        let history = HistoryManager::with_config(storage.clone(), &config.history);
        let preferences =
            PreferencesManager::with_key(storage.clone(), &config.history.last_mode_key);
        info!(
            backend = ?config.storage.backend,
            entries = history.len(),
            "app started"
        );
        Self {
            config,
            history,
            preferences,
            storage,
        }
    }

    pub fn storage(&self) -> &Rc<dyn DurableStorage> {
        &self.storage
    }

    /// Handles a query from the form.
    ///
    /// The mode is remembered as the last used one. A history entry matching
    /// the input (ignoring case and surrounding whitespace) and mode is
    /// returned as is; otherwise `compute` is called with the trimmed input
    /// and its result recorded.
    pub fn submit<F>(&mut self, query_input: &str, mode: ExplanationMode, compute: F) -> Submission
    where
        F: FnOnce(&str, &ExplanationMode) -> ResultPayload,
    {
        self.preferences.set_last_mode(&mode);

        if let Some(existing) = self.history.find_existing(query_input, &mode) {
            info!(id = %existing.id, "reusing history entry");
            return Submission::Reused(existing);
        }

        let results = compute(query_input.trim(), &mode);
        Submission::Recorded(self.history.record(query_input, mode, results))
    }

    /// Returns a past entry so its result can be shown again.
    pub fn select(&self, id: &str) -> Option<HistoryEntry> {
        self.history.get_entry(id)
    }
}
