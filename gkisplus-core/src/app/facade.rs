// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::connectivity::ConnectivitySignal;
#[cfg(feature = "content-updates")]
use crate::content::{DataUpdater, UpdateSummary};
use crate::content::{ContentDomain, ContentError, ContentRoot, ContentSet};
use crate::model::{GalleryData, MainData, ModulesData, StaticData};
#[cfg(feature = "content-updates")]
use crate::download::{CancelFlag, DownloadError, FileDownloader};
use crate::navigation::{self, BackOutcome, NavigationController, Route};
use crate::storage::{PrefKey, PrefValue, SavedAsset, Storage, StorageError};

use super::config::GkiPlusConfig;
use super::events::{AppEvent, EventDispatcher, EventHandler};

/// The application core. One instance per running app.
///
/// All methods take `&self`; interior locking keeps the handle shareable
/// across threads and the mobile binding layer.
pub struct GkiPlus {
    config: GkiPlusConfig,
    content: Arc<ContentSet>,
    storage: Arc<Mutex<Storage>>,
    nav: Mutex<NavigationController>,
    events: EventDispatcher,
    connectivity: ConnectivitySignal,
    #[cfg(feature = "content-updates")]
    updater: DataUpdater,
}

impl GkiPlus {
    /// Opens the app core with no deep link.
    pub fn open(config: GkiPlusConfig) -> Result<Self, GkiPlusError> {
        Self::open_with_deep_link(config, None)
    }

    /// Opens the app core, optionally entering through a deep-link
    /// identifier from the launch URL.
    ///
    /// Content for all four domains is loaded before this returns; the
    /// handle never exists in a contentless state. A pending cold-start
    /// route persisted by [`set_cold_start_route`](Self::set_cold_start_route)
    /// is consumed here and cleared, and an explicit deep link wins over it.
    pub fn open_with_deep_link(
        config: GkiPlusConfig,
        deep_link: Option<&str>,
    ) -> Result<Self, GkiPlusError> {
        fs::create_dir_all(&config.storage_dir)?;
        let storage = Storage::open(config.database_path())?;
        let content = Arc::new(ContentSet::open(&config.content)?);

        let launches = storage.pref_int(PrefKey::LaunchCount)?;
        storage.set_pref(PrefKey::LaunchCount, PrefValue::Int(launches + 1))?;

        let pending = storage.pref_text(PrefKey::ColdStartRoute)?;
        if !pending.is_empty() {
            storage.set_pref(PrefKey::ColdStartRoute, PrefValue::Text(String::new()))?;
        }

        let target = deep_link
            .and_then(navigation::resolve)
            .or_else(|| {
                Route::from_tag(&pending).map(|route| navigation::DeepLinkTarget {
                    initial: route,
                    default_route: None,
                })
            });

        let nav = match target {
            Some(t) => NavigationController::with_initial(
                t.initial,
                t.default_route.unwrap_or(Route::Home),
            ),
            None => NavigationController::new(Route::Home),
        };
        tracing::info!(launches = launches + 1, route = %nav.current(), "app core opened");

        let connectivity = ConnectivitySignal::new();
        Ok(GkiPlus {
            #[cfg(feature = "content-updates")]
            updater: DataUpdater::new(config.content.clone(), connectivity.clone()),
            config,
            content,
            storage: Arc::new(Mutex::new(storage)),
            nav: Mutex::new(nav),
            events: EventDispatcher::new(),
            connectivity,
        })
    }

    pub fn config(&self) -> &GkiPlusConfig {
        &self.config
    }

    // --- Navigation ------------------------------------------------------

    /// The route currently showing.
    pub fn current_route(&self) -> Route {
        self.nav.lock().current()
    }

    /// Navigates to a route, discarding any forward history.
    pub fn navigate(&self, route: Route) {
        self.nav.lock().navigate(route);
        self.events.dispatch(&AppEvent::RouteChanged { route });
    }

    /// Steps back one entry. The shell decides whether
    /// [`BackOutcome::AtRoot`] means "exit the app".
    pub fn pop_back(&self) -> BackOutcome {
        let mut nav = self.nav.lock();
        let before = nav.current();
        let outcome = nav.pop_back();
        drop(nav);
        if outcome.route() != before {
            self.events.dispatch(&AppEvent::RouteChanged {
                route: outcome.route(),
            });
        }
        outcome
    }

    /// Steps forward again after a back, if any forward history remains.
    pub fn pop_forward(&self) -> Option<Route> {
        let route = self.nav.lock().pop_forward();
        if let Some(route) = route {
            self.events.dispatch(&AppEvent::RouteChanged { route });
        }
        route
    }

    /// Handles a deep link arriving while the app is already running.
    /// Returns whether the identifier was recognized.
    ///
    /// The screen becomes the entry point for the next cold start: the mark
    /// is persisted as the cold-start route and consumed by the next
    /// [`open_with_deep_link`](Self::open_with_deep_link).
    pub fn open_deep_link(&self, identifier: &str) -> bool {
        let Some(target) = navigation::resolve(identifier) else {
            tracing::debug!(identifier, "unknown deep-link identifier ignored");
            return false;
        };
        let mut nav = self.nav.lock();
        nav.navigate_as_entry_point(target.initial);
        let entry_point = nav.take_entry_point();
        drop(nav);

        if let Some(route) = entry_point {
            if let Err(e) = self.set_cold_start_route(route) {
                tracing::warn!(error = %e, "deep-link entry point not persisted");
            }
        }
        self.events.dispatch(&AppEvent::RouteChanged {
            route: target.initial,
        });
        true
    }

    /// Persists a route to open on the next cold start (notification taps).
    pub fn set_cold_start_route(&self, route: Route) -> Result<(), GkiPlusError> {
        self.storage
            .lock()
            .set_pref(PrefKey::ColdStartRoute, PrefValue::Text(route.tag().into()))?;
        Ok(())
    }

    // --- Content ---------------------------------------------------------

    /// The live document for a domain.
    pub fn content_root(&self, domain: ContentDomain) -> Arc<ContentRoot> {
        self.content.get(domain).root()
    }

    /// Decoded view of the main document.
    pub fn main_data(&self) -> MainData {
        self.content_root(ContentDomain::Main).decode()
    }

    /// Decoded view of the modules document.
    pub fn modules_data(&self) -> ModulesData {
        self.content_root(ContentDomain::Modules).decode()
    }

    /// Decoded view of the gallery document.
    pub fn gallery_data(&self) -> GalleryData {
        self.content_root(ContentDomain::Gallery).decode()
    }

    /// Decoded view of the static-pages document.
    pub fn static_data(&self) -> StaticData {
        self.content_root(ContentDomain::Static).decode()
    }

    /// Runs one full refresh cycle and reports per-domain outcomes as
    /// events in addition to the returned summary.
    #[cfg(feature = "content-updates")]
    pub async fn refresh_all(&self) -> UpdateSummary {
        let was_online = self.connectivity.is_online();
        let summary = self.updater.run_cycle(&self.content).await;

        if let UpdateSummary::Completed {
            applied,
            failed,
            skipped,
        } = &summary
        {
            for domain in applied {
                self.events
                    .dispatch(&AppEvent::RefreshApplied { domain: *domain });
            }
            for (domain, error) in failed {
                self.events.dispatch(&AppEvent::RefreshFailed {
                    domain: *domain,
                    error: error.clone(),
                });
            }
            for domain in skipped {
                self.events
                    .dispatch(&AppEvent::RefreshSkipped { domain: *domain });
            }
        }

        let online = self.connectivity.is_online();
        if online != was_online {
            self.events
                .dispatch(&AppEvent::ConnectivityChanged { online });
        }
        summary
    }

    // --- Downloads -------------------------------------------------------

    /// Downloads a binary asset (PDF, photo) into the downloads directory
    /// and records it in the saved-asset registry.
    #[cfg(feature = "content-updates")]
    pub async fn download_file<F>(
        &self,
        url: &str,
        filename: &str,
        cancel: &CancelFlag,
        progress: F,
    ) -> Result<SavedAsset, DownloadError>
    where
        F: FnMut(u64, Option<u64>),
    {
        let downloader = FileDownloader::new(self.config.downloads_dir(), &self.config.content)?;
        let asset = downloader.download(url, filename, cancel, progress).await?;
        if let Err(e) = self.storage.lock().record_saved_asset(&asset) {
            tracing::warn!(url, error = %e, "downloaded file not recorded in registry");
        }
        Ok(asset)
    }

    /// Previously downloaded asset for a URL, if any.
    pub fn saved_asset(&self, url: &str) -> Result<Option<SavedAsset>, GkiPlusError> {
        Ok(self.storage.lock().saved_asset(url)?)
    }

    /// All recorded downloads, most recent first.
    pub fn saved_assets(&self) -> Result<Vec<SavedAsset>, GkiPlusError> {
        Ok(self.storage.lock().list_saved_assets()?)
    }

    // --- Preferences -----------------------------------------------------

    pub fn pref(&self, key: PrefKey) -> Result<PrefValue, GkiPlusError> {
        Ok(self.storage.lock().pref(key)?)
    }

    pub fn set_pref(&self, key: PrefKey, value: PrefValue) -> Result<(), GkiPlusError> {
        Ok(self.storage.lock().set_pref(key, value)?)
    }

    // --- Plumbing --------------------------------------------------------

    /// Registers an event handler. Dispatch is inline on the calling
    /// thread; handlers must be cheap.
    pub fn add_event_handler(&self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }

    /// The shared online/offline assumption.
    pub fn connectivity(&self) -> ConnectivitySignal {
        self.connectivity.clone()
    }

    /// The content set, for wiring a background scheduler.
    pub fn content_set(&self) -> Arc<ContentSet> {
        Arc::clone(&self.content)
    }

    /// The storage handle, for wiring a background scheduler.
    pub fn storage(&self) -> Arc<Mutex<Storage>> {
        Arc::clone(&self.storage)
    }
}

/// Errors from opening or operating the app core.
#[derive(Debug, Error)]
pub enum GkiPlusError {
    /// Storage layer failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Content pipeline failed
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::CallbackHandler;

    fn test_app(temp: &tempfile::TempDir) -> GkiPlus {
        let config = GkiPlusConfig::new(temp.path()).without_remote_updates();
        GkiPlus::open(config).unwrap()
    }

    #[test]
    fn test_open_starts_at_home_with_content() {
        let temp = tempfile::TempDir::new().unwrap();
        let app = test_app(&temp);

        assert_eq!(app.current_route(), Route::Home);
        // Bundled fallback is live immediately
        assert!(!app.main_data().carousel.is_empty());
        assert!(!app.gallery_data().albums.is_empty());
    }

    #[test]
    fn test_launch_count_increments_across_opens() {
        let temp = tempfile::TempDir::new().unwrap();
        {
            let app = test_app(&temp);
            assert_eq!(app.pref(PrefKey::LaunchCount).unwrap(), PrefValue::Int(1));
        }
        let app = test_app(&temp);
        assert_eq!(app.pref(PrefKey::LaunchCount).unwrap(), PrefValue::Int(2));
    }

    #[test]
    fn test_deep_link_launch() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = GkiPlusConfig::new(temp.path()).without_remote_updates();
        let app = GkiPlus::open_with_deep_link(config, Some("saren")).unwrap();

        assert_eq!(app.current_route(), Route::Devotional);
        // Back from a deep-link entry lands on the default route
        assert_eq!(app.pop_back(), BackOutcome::AtRoot(Route::Home));
    }

    #[test]
    fn test_cold_start_route_is_consumed_once() {
        let temp = tempfile::TempDir::new().unwrap();
        {
            let app = test_app(&temp);
            app.set_cold_start_route(Route::Gallery).unwrap();
        }
        {
            let app = test_app(&temp);
            assert_eq!(app.current_route(), Route::Gallery);
        }
        // Second launch is back to normal
        let app = test_app(&temp);
        assert_eq!(app.current_route(), Route::Home);
    }

    #[test]
    fn test_navigation_dispatches_events() {
        let temp = tempfile::TempDir::new().unwrap();
        let app = test_app(&temp);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        app.add_event_handler(Arc::new(CallbackHandler::new(move |event: &AppEvent| {
            sink.lock().push(event.clone());
        })));

        app.navigate(Route::Library);
        app.pop_back();
        app.pop_back(); // at root, no event

        assert_eq!(
            *seen.lock(),
            vec![
                AppEvent::RouteChanged {
                    route: Route::Library
                },
                AppEvent::RouteChanged { route: Route::Home },
            ]
        );
    }

    #[test]
    fn test_running_deep_link() {
        let temp = tempfile::TempDir::new().unwrap();
        let app = test_app(&temp);

        assert!(app.open_deep_link("gallery"));
        assert_eq!(app.current_route(), Route::Gallery);
        assert!(!app.open_deep_link("not-a-screen"));
        assert_eq!(app.current_route(), Route::Gallery);
    }

    #[test]
    fn test_running_deep_link_becomes_next_cold_start_route() {
        let temp = tempfile::TempDir::new().unwrap();
        {
            let app = test_app(&temp);
            assert!(app.open_deep_link("gallery"));
        }
        // The entry point survives the relaunch...
        {
            let app = test_app(&temp);
            assert_eq!(app.current_route(), Route::Gallery);
        }
        // ...and is consumed once
        let app = test_app(&temp);
        assert_eq!(app.current_route(), Route::Home);
    }
}
