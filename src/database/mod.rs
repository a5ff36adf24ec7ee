//! BioLingua database layer.
//!
//! Provides SQLite connection management and schema migrations for the
//! key-value table behind [`crate::storage::SqliteStorage`].
//!
//! # Usage
//!
//! ```no_run
//! use biolingua::database::Database;
//!
//! let db = Database::open("biolingua.db").expect("failed to open database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
