// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-domain content repository.
//!
//! Produces the in-memory `ContentRoot` for its domain, preferring the
//! freshest available data: cache file when present, bundled fallback
//! otherwise. The shared root is swapped as a whole `Arc` so readers never
//! observe a half-updated tree.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use super::cache::{CacheError, ContentCache};
use super::config::ContentConfig;
use super::domain::ContentDomain;
#[cfg(feature = "content-updates")]
use super::fetcher::{ContentFetcher, FetchError};
use super::root::ContentRoot;

/// Loads and refreshes one domain's content document.
pub struct ContentRepository {
    domain: ContentDomain,
    cache: ContentCache,
    root: RwLock<Arc<ContentRoot>>,
}

impl ContentRepository {
    /// Opens the repository and eagerly loads the best available document,
    /// so a structurally valid root exists before any reader runs.
    ///
    /// When no cache file exists yet, the bundled fallback is materialized
    /// into the cache so later logic can treat "cache exists" uniformly.
    /// A malformed bundled document is a packaging defect and fails here.
    pub fn open(domain: ContentDomain, config: &ContentConfig) -> Result<Self, ContentError> {
        let cache = ContentCache::new(&config.storage_path)?;

        let fallback = ContentRoot::parse(domain, domain.bundled().as_bytes())
            .map_err(|e| ContentError::BundledInvalid { domain, source: e })?;

        if !cache.exists(domain) {
            cache.write(domain, domain.bundled().as_bytes())?;
        }

        let repo = ContentRepository {
            domain,
            cache,
            root: RwLock::new(Arc::new(fallback)),
        };
        repo.load_current();
        Ok(repo)
    }

    pub fn domain(&self) -> ContentDomain {
        self.domain
    }

    /// Current in-memory snapshot.
    pub fn root(&self) -> Arc<ContentRoot> {
        Arc::clone(&self.root.read())
    }

    /// Parses the bundled fallback document.
    pub fn load_fallback(&self) -> Result<ContentRoot, ContentError> {
        ContentRoot::parse(self.domain, self.domain.bundled().as_bytes()).map_err(|e| {
            ContentError::BundledInvalid {
                domain: self.domain,
                source: e,
            }
        })
    }

    /// Re-reads the best available document, swaps it in, and returns the
    /// fresh snapshot.
    ///
    /// An unreadable cache file is logged and substituted with the bundled
    /// fallback; the method never propagates parse errors to callers.
    pub fn load_current(&self) -> Arc<ContentRoot> {
        let parsed = self
            .cache
            .read(self.domain)
            .and_then(|bytes| match ContentRoot::parse(self.domain, &bytes) {
                Ok(root) => Some(root),
                Err(e) => {
                    tracing::warn!(
                        domain = %self.domain,
                        error = %e,
                        "cached document unreadable, serving bundled fallback"
                    );
                    None
                }
            });

        let root = match parsed {
            Some(root) => root,
            None => self
                .load_fallback()
                .unwrap_or_else(|_| ContentRoot::empty(self.domain)),
        };

        let root = Arc::new(root);
        *self.root.write() = Arc::clone(&root);
        root
    }
}

#[cfg(feature = "content-updates")]
impl ContentRepository {
    /// Downloads the domain document and overwrites the cache file.
    ///
    /// With `auto_swap` the new document is parsed and swapped in
    /// immediately; otherwise the next `load_current` picks it up. On any
    /// failure the previous in-memory root is left untouched; the caller
    /// decides whether the error is surfaced (manual refresh) or only
    /// logged (background cycle).
    ///
    /// The repository does not touch the connectivity signal. The updater
    /// owns that signal and flips it based on the error returned here, so
    /// one failing cycle flips it exactly once.
    pub async fn refresh_from_network(
        &self,
        fetcher: &ContentFetcher,
        auto_swap: bool,
    ) -> Result<(), ContentError> {
        let bytes = fetcher.fetch_document(self.domain).await?;

        self.cache.write(self.domain, &bytes)?;

        if auto_swap {
            self.load_current();
        }
        Ok(())
    }
}

/// All four domain repositories, opened together.
pub struct ContentSet {
    pub main: ContentRepository,
    pub modules: ContentRepository,
    pub gallery: ContentRepository,
    pub statics: ContentRepository,
}

impl ContentSet {
    /// Opens every domain repository against the same config.
    pub fn open(config: &ContentConfig) -> Result<Self, ContentError> {
        Ok(ContentSet {
            main: ContentRepository::open(ContentDomain::Main, config)?,
            modules: ContentRepository::open(ContentDomain::Modules, config)?,
            gallery: ContentRepository::open(ContentDomain::Gallery, config)?,
            statics: ContentRepository::open(ContentDomain::Static, config)?,
        })
    }

    /// Repository for one domain.
    pub fn get(&self, domain: ContentDomain) -> &ContentRepository {
        match domain {
            ContentDomain::Main => &self.main,
            ContentDomain::Modules => &self.modules,
            ContentDomain::Gallery => &self.gallery,
            ContentDomain::Static => &self.statics,
        }
    }

    /// Iterates the repositories in refresh order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentRepository> {
        ContentDomain::ALL.iter().map(move |d| self.get(*d))
    }
}

/// Errors from the repository layer.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Cache error
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// Bundled document failed to parse; a packaging defect
    #[error("bundled {domain} document is malformed: {source}")]
    BundledInvalid {
        /// The affected domain
        domain: ContentDomain,
        /// The underlying parse error
        source: serde_json::Error,
    },

    /// Network-layer failure while fetching
    #[cfg(feature = "content-updates")]
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}
