// BioLingua state managers
// Managers own the persisted collections: query history, favorites, and preferences.

pub mod history_manager;
pub mod preferences_manager;
