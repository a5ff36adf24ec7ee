//! Typed value mirrored into one durable storage slot.
//!
//! The in-memory value is always authoritative. Storage is written through on
//! every change and read once on hydration; every storage or (de)serialization
//! failure is logged and swallowed.

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::DurableStorage;

pub struct PersistentValue<T> {
    storage: Rc<dyn DurableStorage>,
    key: String,
    value: T,
}

impl<T> PersistentValue<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates the adapter holding `fallback`, without touching storage.
    ///
    /// Call [`hydrate`](Self::hydrate) to pick up a previously stored value.
    pub fn new(storage: Rc<dyn DurableStorage>, key: impl Into<String>, fallback: T) -> Self {
        Self {
            storage,
            key: key.into(),
            value: fallback,
        }
    }

    /// Creates the adapter and immediately hydrates it from storage.
    pub fn open(storage: Rc<dyn DurableStorage>, key: impl Into<String>, fallback: T) -> Self {
        let mut value = Self::new(storage, key, fallback);
        value.hydrate();
        value
    }

    /// Replaces the in-memory value with the stored one, if any.
    ///
    /// Returns `true` when a stored value was applied. Missing, unreadable, or
    /// malformed data leaves the current value untouched.
    pub fn hydrate(&mut self) -> bool {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored value, keeping fallback");
                return false;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "error reading stored value");
                return false;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(stored) => {
                self.value = stored;
                debug!(key = %self.key, "hydrated stored value");
                true
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding malformed stored value");
                false
            }
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sets the in-memory value, then writes it through to storage.
    ///
    /// A failed write is logged; the in-memory value is kept either way.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Updater form of [`set`](Self::set): the new value is computed from the current one.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next);
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %self.key, error = %e, "error serializing value, not persisted");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.key, &json) {
            warn!(key = %self.key, error = %e, "error persisting value");
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
