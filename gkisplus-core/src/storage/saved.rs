// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry of downloaded binary assets (PDFs, gallery photos).
//!
//! The files themselves live in the downloads directory; this table only
//! remembers which remote URL landed where, so the UI can offer "open"
//! instead of "download" on the next visit.

use std::path::PathBuf;

use rusqlite::params;

use super::{Storage, StorageError};

/// One downloaded asset.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedAsset {
    /// Remote URL the asset came from.
    pub url: String,
    /// Where the file was written.
    pub local_path: PathBuf,
    /// Final size in bytes.
    pub size_bytes: u64,
    /// Unix timestamp of completion.
    pub saved_at: i64,
}

impl SavedAsset {
    /// An asset record stamped with the current time.
    pub fn new(url: impl Into<String>, local_path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        SavedAsset {
            url: url.into(),
            local_path: local_path.into(),
            size_bytes,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl Storage {
    /// Records a completed download, replacing any previous record for the
    /// same URL.
    pub fn record_saved_asset(&self, asset: &SavedAsset) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO saved_assets (url, local_path, size_bytes, saved_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(url) DO UPDATE SET local_path = ?2, size_bytes = ?3, saved_at = ?4",
            params![
                asset.url,
                asset.local_path.to_string_lossy(),
                asset.size_bytes as i64,
                asset.saved_at
            ],
        )?;
        Ok(())
    }

    /// Looks up the record for a remote URL.
    pub fn saved_asset(&self, url: &str) -> Result<Option<SavedAsset>, StorageError> {
        let row = self.conn.query_row(
            "SELECT url, local_path, size_bytes, saved_at FROM saved_assets WHERE url = ?1",
            params![url],
            |r| {
                Ok(SavedAsset {
                    url: r.get(0)?,
                    local_path: PathBuf::from(r.get::<_, String>(1)?),
                    size_bytes: r.get::<_, i64>(2)? as u64,
                    saved_at: r.get(3)?,
                })
            },
        );

        match row {
            Ok(asset) => Ok(Some(asset)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All recorded downloads, most recent first.
    pub fn list_saved_assets(&self) -> Result<Vec<SavedAsset>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT url, local_path, size_bytes, saved_at FROM saved_assets
             ORDER BY saved_at DESC",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(SavedAsset {
                url: r.get(0)?,
                local_path: PathBuf::from(r.get::<_, String>(1)?),
                size_bytes: r.get::<_, i64>(2)? as u64,
                saved_at: r.get(3)?,
            })
        })?;

        let mut assets = Vec::new();
        for asset in rows {
            assets.push(asset?);
        }
        Ok(assets)
    }

    /// Removes the record for a URL. Returns whether a record existed.
    pub fn remove_saved_asset(&self, url: &str) -> Result<bool, StorageError> {
        let affected = self
            .conn
            .execute("DELETE FROM saved_assets WHERE url = ?1", params![url])?;
        Ok(affected > 0)
    }
}
