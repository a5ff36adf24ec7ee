//! Preferences Manager for BioLingua.
//!
//! Remembers the explanation mode last used on the query form so the next
//! session starts from it.

use std::rc::Rc;

use crate::storage::{DurableStorage, PersistentValue};
use crate::types::history::ExplanationMode;
use crate::types::settings::DEFAULT_LAST_MODE_KEY;

/// Trait defining preference operations.
pub trait PreferencesManagerTrait {
    fn last_mode(&self) -> ExplanationMode;
    fn set_last_mode(&mut self, mode: &ExplanationMode);
}

pub struct PreferencesManager {
    last_mode: PersistentValue<ExplanationMode>,
}

impl PreferencesManager {
    /// Creates a `PreferencesManager` under the default key.
    pub fn new(storage: Rc<dyn DurableStorage>) -> Self {
        Self::with_key(storage, DEFAULT_LAST_MODE_KEY)
    }

    pub fn with_key(storage: Rc<dyn DurableStorage>, key: &str) -> Self {
        Self {
            last_mode: PersistentValue::open(storage, key, ExplanationMode::default()),
        }
    }
}

impl PreferencesManagerTrait for PreferencesManager {
    fn last_mode(&self) -> ExplanationMode {
        self.last_mode.get().clone()
    }

    /// Skips the write when the mode is unchanged.
    fn set_last_mode(&mut self, mode: &ExplanationMode) {
        if self.last_mode.get() != mode {
            self.last_mode.set(mode.clone());
        }
    }
}
