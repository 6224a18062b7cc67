// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! GKI Salatiga+ Core Library
//!
//! Content, navigation, and persistence core for the GKI Salatiga community
//! app. The platform UI layers (the full "plus" build and the reduced
//! F-Droid build) are thin shells over this crate: they render whatever the
//! content repositories currently hold and forward user gestures to the
//! navigation controller.
//!
//! Build the reduced variant with `--no-default-features`; that drops the
//! `content-updates` feature and with it the HTTP client, leaving
//! bundled/cached content only.

pub mod app;
pub mod connectivity;
pub mod content;
#[cfg(feature = "content-updates")]
pub mod download;
pub mod model;
pub mod navigation;
pub mod storage;
#[cfg(feature = "content-updates")]
pub mod worker;

pub use app::{
    AppEvent, CallbackHandler, EventDispatcher, EventHandler, GkiPlus, GkiPlusConfig, GkiPlusError,
};
pub use connectivity::ConnectivitySignal;
#[cfg(feature = "content-updates")]
pub use content::{ContentFetcher, DataUpdater, FetchError, UpdateSummary};
pub use content::{
    CacheError, ContentCache, ContentConfig, ContentDomain, ContentError, ContentMeta,
    ContentRepository, ContentRoot, ContentSet, FeedDescriptor,
};
#[cfg(feature = "content-updates")]
pub use download::{CancelFlag, DownloadError, FileDownloader};
pub use model::{GalleryData, MainData, ModulesData, StaticData};
pub use navigation::{BackOutcome, DeepLinkTarget, NavigationController, Route};
pub use storage::{PrefKey, PrefValue, SavedAsset, Storage, StorageError};
#[cfg(feature = "content-updates")]
pub use worker::{delay_until_next, RefreshPolicy, RefreshScheduler};
