//! GKI Salatiga+ Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes a simplified, mobile-friendly API on top of gkisplus-core.
//!
//! The refresh API is synchronous at the FFI boundary; an internal runtime
//! drives the async core so platform callers never need their own executor.

use std::sync::Arc;

use gkisplus_core::{GkiPlus, GkiPlusConfig};

// === Modules ===

mod error;
mod types;

// Re-export public types
pub use error::MobileError;
pub use types::{
    MobileBackOutcome, MobileContentDomain, MobileContentMeta, MobilePrefKey, MobilePrefValue,
    MobileRefreshFailure, MobileRoute, MobileUpdateSummary,
};

uniffi::setup_scaffolding!();

/// The app core handle exposed to the platform shell. One per process.
#[derive(uniffi::Object)]
pub struct MobileApp {
    core: GkiPlus,
    #[cfg(feature = "content-updates")]
    runtime: tokio::runtime::Runtime,
}

#[uniffi::export]
impl MobileApp {
    /// Opens the app core.
    ///
    /// `storage_dir` is the app-private directory (`filesDir` on Android).
    /// `base_url` overrides the content host when set. `deep_link` is the
    /// identifier from the launch URL, if the app was opened through one.
    #[uniffi::constructor]
    pub fn new(
        storage_dir: String,
        base_url: Option<String>,
        deep_link: Option<String>,
    ) -> Result<Arc<Self>, MobileError> {
        let mut config = GkiPlusConfig::new(storage_dir);
        if let Some(url) = base_url {
            config = config.with_base_url(url);
        }
        #[cfg(not(feature = "content-updates"))]
        {
            config = config.without_remote_updates();
        }

        let core = GkiPlus::open_with_deep_link(config, deep_link.as_deref())?;

        Ok(Arc::new(MobileApp {
            core,
            #[cfg(feature = "content-updates")]
            runtime: tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(|e| MobileError::Internal(e.to_string()))?,
        }))
    }

    // === Navigation ===

    /// The route currently showing.
    pub fn current_route(&self) -> MobileRoute {
        self.core.current_route().into()
    }

    /// Navigates to a route, discarding any forward history.
    pub fn navigate(&self, route: MobileRoute) {
        self.core.navigate(route.into());
    }

    /// Steps back one entry. On `AtRoot` the shell decides whether to exit.
    pub fn pop_back(&self) -> MobileBackOutcome {
        self.core.pop_back().into()
    }

    /// Steps forward again after a back. `None` when no forward entry exists.
    pub fn pop_forward(&self) -> Option<MobileRoute> {
        self.core.pop_forward().map(Into::into)
    }

    /// Handles a deep link arriving while the app is running.
    /// Returns whether the identifier was recognized.
    pub fn open_deep_link(&self, identifier: String) -> bool {
        self.core.open_deep_link(&identifier)
    }

    /// Persists a route to open on the next cold start (notification taps).
    pub fn set_cold_start_route(&self, route: MobileRoute) -> Result<(), MobileError> {
        self.core.set_cold_start_route(route.into())?;
        Ok(())
    }

    // === Content ===

    /// The live payload for a domain as a JSON string, ready for the
    /// shell's own decoding.
    pub fn payload_json(&self, domain: MobileContentDomain) -> String {
        let root = self.core.content_root(domain.into());
        serde_json::to_string(root.payload()).unwrap_or_else(|_| "null".to_string())
    }

    /// Metadata of the live document for a domain.
    pub fn content_meta(&self, domain: MobileContentDomain) -> MobileContentMeta {
        let root = self.core.content_root(domain.into());
        root.meta().into()
    }

    /// Whether the device is assumed online.
    pub fn is_online(&self) -> bool {
        self.core.connectivity().is_online()
    }

    /// Local path of a previously downloaded asset, if one is recorded for
    /// this URL. The shell shows "open" instead of "download" when set.
    pub fn saved_asset_path(&self, url: String) -> Result<Option<String>, MobileError> {
        Ok(self
            .core
            .saved_asset(&url)?
            .map(|asset| asset.local_path.to_string_lossy().into_owned()))
    }

    // === Preferences ===

    /// Reads a preference; unset keys yield their hardcoded default.
    pub fn get_pref(&self, key: MobilePrefKey) -> Result<MobilePrefValue, MobileError> {
        Ok(self.core.pref(key.into())?.into())
    }

    /// Writes a preference. Fails when the value's variant does not match
    /// the key's declared variant.
    pub fn set_pref(&self, key: MobilePrefKey, value: MobilePrefValue) -> Result<(), MobileError> {
        self.core.set_pref(key.into(), value.into())?;
        Ok(())
    }
}

#[cfg(feature = "content-updates")]
#[uniffi::export]
impl MobileApp {
    /// Runs one full refresh cycle, blocking the calling thread. Platform
    /// shells should call this from a background thread or WorkManager job.
    pub fn refresh_all(&self) -> MobileUpdateSummary {
        self.runtime.block_on(self.core.refresh_all()).into()
    }
}
