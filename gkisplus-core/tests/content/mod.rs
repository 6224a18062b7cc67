// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the content pipeline.

mod cache_tests;
mod repository_tests;
#[cfg(feature = "content-updates")]
mod updater_tests;

use std::time::Duration;

use gkisplus_core::ContentConfig;
use tempfile::TempDir;

/// Config rooted at a temp dir, pointing at a host that refuses
/// connections so network attempts fail fast.
pub fn test_config(temp: &TempDir) -> ContentConfig {
    ContentConfig {
        storage_path: temp.path().to_path_buf(),
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_millis(300),
        ..Default::default()
    }
}
