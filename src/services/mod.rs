// BioLingua services
// Services that are not tied to a persisted collection: config loading.

pub mod config_engine;
