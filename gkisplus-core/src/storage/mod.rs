// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistent key-value preferences and local storage.
//!
//! One SQLite database file in the app's private storage holds the typed
//! preference table and the registry of downloaded binary assets. Content
//! documents are NOT stored here; they live as whole files in the content
//! cache.

mod prefs;
mod saved;

pub use prefs::{PrefKey, PrefValue};
pub use saved::SavedAsset;

use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

/// SQLite-based storage.
pub struct Storage {
    pub(crate) conn: Connection,
}

impl Storage {
    /// Opens or creates the database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let storage = Storage { conn };
        storage.run_migrations()?;
        Ok(storage)
    }

    /// Creates an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage { conn };
        storage.run_migrations()?;
        Ok(storage)
    }

    fn run_migrations(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS preferences (
                key   TEXT PRIMARY KEY,
                kind  TEXT NOT NULL,
                value TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS saved_assets (
                url        TEXT PRIMARY KEY,
                local_path TEXT NOT NULL,
                size_bytes INTEGER NOT NULL,
                saved_at   INTEGER NOT NULL
            );",
        )?;
        Ok(())
    }
}

/// Errors from the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A preference write whose variant does not match the key's declared
    /// variant
    #[error("type mismatch for preference {key}: expected {expected}, got {got}")]
    TypeMismatch {
        /// The preference key
        key: &'static str,
        /// Variant the key is declared with
        expected: &'static str,
        /// Variant the caller supplied
        got: &'static str,
    },

    /// Stored value failed to decode
    #[error("serialization error: {0}")]
    Serialization(String),
}
