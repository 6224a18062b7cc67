// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! On-disk cache of downloaded content documents.
//!
//! One fixed-name file per domain inside the app's private storage; the file
//! is verbatim the last successfully downloaded byte stream. Writes go to a
//! temp file first and are renamed into place, so a reader never observes a
//! partially written document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::domain::ContentDomain;

/// Local cache of the content documents.
pub struct ContentCache {
    cache_dir: PathBuf,
}

impl ContentCache {
    /// Creates a cache rooted at `storage_path/content`, creating the
    /// directory if needed.
    pub fn new(storage_path: &Path) -> Result<Self, CacheError> {
        let cache_dir = storage_path.join("content");
        fs::create_dir_all(&cache_dir)?;
        Ok(ContentCache { cache_dir })
    }

    /// Whether a cached document exists for the domain.
    pub fn exists(&self, domain: ContentDomain) -> bool {
        self.path(domain).exists()
    }

    /// Reads the cached document, if present.
    pub fn read(&self, domain: ContentDomain) -> Option<Vec<u8>> {
        fs::read(self.path(domain)).ok()
    }

    /// Overwrites the cached document atomically.
    pub fn write(&self, domain: ContentDomain, data: &[u8]) -> Result<(), CacheError> {
        atomic_write(&self.path(domain), data)
    }

    /// Removes the cached document. Missing files are not an error.
    pub fn remove(&self, domain: ContentDomain) -> Result<(), CacheError> {
        match fs::remove_file(self.path(domain)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path(&self, domain: ContentDomain) -> PathBuf {
        self.cache_dir.join(domain.cache_filename())
    }
}

/// Atomic file write (write to temp, then rename).
///
/// Either the old content remains or the new content is fully written.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), CacheError> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Errors that can occur with the content cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
