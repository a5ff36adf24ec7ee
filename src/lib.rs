//! BioLingua: study-history core for a Turkish-to-English biology assistant.
//!
//! Records AI-produced query results in a bounded, persisted log, detects
//! repeat queries, and tracks favorites. This library crate exposes all
//! modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
pub mod util;
