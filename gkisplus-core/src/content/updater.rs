// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Feed-gated refresh orchestration across all domains.
//!
//! One cycle fetches the feed descriptor first; when that fails the device
//! is treated as offline and nothing else is attempted this cycle. Each
//! domain then refreshes independently, and only when its remote counter is
//! strictly greater than the counter of the document already held.

use crate::connectivity::ConnectivitySignal;

use super::config::ContentConfig;
use super::domain::ContentDomain;
use super::feeds::FeedDescriptor;
use super::fetcher::ContentFetcher;
use super::repository::ContentSet;

/// Result of one update cycle.
#[derive(Debug, Clone)]
pub enum UpdateSummary {
    /// Remote updates are disabled by user settings.
    Disabled,
    /// The feed descriptor could not be fetched; no domain was attempted
    /// and the previously held data continues to serve reads.
    Offline(String),
    /// The cycle ran. All lists may be empty when everything was current.
    Completed {
        /// Domains that downloaded and swapped in a new document.
        applied: Vec<ContentDomain>,
        /// Domains whose refresh failed, with error messages.
        failed: Vec<(ContentDomain, String)>,
        /// Domains whose remote counter reported no change.
        skipped: Vec<ContentDomain>,
    },
}

/// Orchestrates refreshes across the content set.
pub struct DataUpdater {
    config: ContentConfig,
    connectivity: ConnectivitySignal,
}

impl DataUpdater {
    pub fn new(config: ContentConfig, connectivity: ConnectivitySignal) -> Self {
        DataUpdater {
            config,
            connectivity,
        }
    }

    /// Domains whose remote counter is strictly greater than the local one.
    ///
    /// Pure planning step; separated from `run_cycle` so the gating rule is
    /// testable without a network.
    pub fn plan(feeds: &FeedDescriptor, set: &ContentSet) -> Vec<ContentDomain> {
        set.iter()
            .filter(|repo| {
                let local = repo.root().meta().update_count;
                feeds
                    .counter(repo.domain())
                    .map_or(false, |remote| remote > local)
            })
            .map(|repo| repo.domain())
            .collect()
    }

    /// Runs one cycle: fetch the feed descriptor, then refresh every domain
    /// the plan selects. Per-domain failures are collected, never raised.
    pub async fn run_cycle(&self, set: &ContentSet) -> UpdateSummary {
        if !self.config.remote_updates_enabled {
            return UpdateSummary::Disabled;
        }

        let fetcher = match ContentFetcher::new(&self.config) {
            Ok(f) => f,
            Err(e) => return UpdateSummary::Offline(e.to_string()),
        };

        let feeds = match fetcher.fetch_feeds().await {
            Ok(feeds) => feeds,
            Err(e) => {
                self.connectivity.set_online(false);
                tracing::warn!(error = %e, "feed descriptor unavailable, skipping refresh cycle");
                return UpdateSummary::Offline(e.to_string());
            }
        };
        self.connectivity.set_online(true);

        let selected = Self::plan(&feeds, set);
        let mut applied = Vec::new();
        let mut failed = Vec::new();
        let mut skipped = Vec::new();

        for repo in set.iter() {
            let domain = repo.domain();
            if !selected.contains(&domain) {
                skipped.push(domain);
                continue;
            }
            match repo.refresh_from_network(&fetcher, true).await {
                Ok(()) => {
                    tracing::debug!(domain = %domain, "content refreshed");
                    applied.push(domain);
                }
                Err(e) => {
                    self.connectivity.set_online(false);
                    tracing::warn!(domain = %domain, error = %e, "refresh failed, previous data retained");
                    failed.push((domain, e.to_string()));
                }
            }
        }

        UpdateSummary::Completed {
            applied,
            failed,
            skipped,
        }
    }

    /// Shared connectivity signal.
    pub fn connectivity(&self) -> ConnectivitySignal {
        self.connectivity.clone()
    }
}
