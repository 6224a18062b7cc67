// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the content system.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration shared by the repositories, the fetcher, and the updater.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// App-private storage path; the cache directory lives under it.
    pub storage_path: PathBuf,

    /// Remote content base URL.
    pub base_url: String,

    /// Enable/disable remote refresh entirely (user setting).
    pub remote_updates_enabled: bool,

    /// HTTP timeout for document fetches.
    pub timeout: Duration,

    /// Maximum content document size (bytes).
    pub max_content_size: u64,

    /// Proxy URL, if the user routes traffic through one.
    pub proxy_url: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            storage_path: PathBuf::from("."),
            base_url: "https://data.gkisalatiga.org".to_string(),
            remote_updates_enabled: true,
            timeout: Duration::from_secs(30),
            max_content_size: 5 * 1024 * 1024, // 5 MB
            proxy_url: None,
        }
    }
}

impl ContentConfig {
    /// Configure with a custom proxy.
    pub fn with_proxy(mut self, proxy_url: String) -> Self {
        self.proxy_url = Some(proxy_url);
        self
    }

    /// Disable remote refresh (bundled/cached content only).
    pub fn without_remote_updates(mut self) -> Self {
        self.remote_updates_enabled = false;
        self
    }
}
