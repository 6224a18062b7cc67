// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content pipeline for the four JSON domains.
//!
//! Each domain (main, modules, gallery, static) is one remotely hosted JSON
//! document. Resolution order is cache file → bundled fallback; a refresh
//! downloads the whole document, overwrites the cache atomically, and swaps
//! the in-memory root wholesale. The small feed descriptor carries one
//! update counter per domain and gates which downloads actually happen.

mod cache;
mod config;
mod domain;
mod feeds;
#[cfg(feature = "content-updates")]
mod fetcher;
mod repository;
mod root;
#[cfg(feature = "content-updates")]
mod updater;

pub use cache::{CacheError, ContentCache};
pub use config::ContentConfig;
pub use domain::ContentDomain;
pub use feeds::{FeedDescriptor, FEEDS_FILENAME};
#[cfg(feature = "content-updates")]
pub use fetcher::{ContentFetcher, FetchError};
pub use repository::{ContentError, ContentRepository, ContentSet};
pub use root::{ContentMeta, ContentRoot};
#[cfg(feature = "content-updates")]
pub use updater::{DataUpdater, UpdateSummary};
