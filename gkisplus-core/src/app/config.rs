// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use crate::content::ContentConfig;

/// Configuration for a [`GkiPlus`](super::GkiPlus) instance.
#[derive(Debug, Clone)]
pub struct GkiPlusConfig {
    /// App-private directory holding the database, the content cache, and
    /// downloads.
    pub storage_dir: PathBuf,
    /// Content pipeline settings.
    pub content: ContentConfig,
}

impl GkiPlusConfig {
    /// Configuration rooted at the given storage directory.
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        let storage_dir = storage_dir.into();
        let content = ContentConfig {
            storage_path: storage_dir.clone(),
            ..Default::default()
        };
        GkiPlusConfig {
            storage_dir,
            content,
        }
    }

    /// Overrides the remote content host (staging, mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.content.base_url = base_url.into();
        self
    }

    /// Disables all remote refreshes; the app serves cache and bundled
    /// fallback only.
    pub fn without_remote_updates(mut self) -> Self {
        self.content.remote_updates_enabled = false;
        self
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.storage_dir.join("gkisplus.db")
    }

    /// Directory downloaded assets are written into.
    pub fn downloads_dir(&self) -> PathBuf {
        self.storage_dir.join("downloads")
    }

    /// The storage root.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }
}
