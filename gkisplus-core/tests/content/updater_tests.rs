// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

use gkisplus_core::{
    ConnectivitySignal, ContentDomain, ContentSet, DataUpdater, FeedDescriptor, UpdateSummary,
};
use tempfile::TempDir;

use super::test_config;

#[test]
fn test_plan_skips_equal_counters() {
    let temp = TempDir::new().unwrap();
    let set = ContentSet::open(&test_config(&temp)).unwrap();

    // Feed counters match the bundled documents exactly
    let feeds = FeedDescriptor::with_counters(&[
        (ContentDomain::Main, 22),
        (ContentDomain::Modules, 9),
        (ContentDomain::Gallery, 31),
        (ContentDomain::Static, 5),
    ]);
    assert!(DataUpdater::plan(&feeds, &set).is_empty());
}

#[test]
fn test_plan_selects_strictly_greater_counters() {
    let temp = TempDir::new().unwrap();
    let set = ContentSet::open(&test_config(&temp)).unwrap();

    let feeds = FeedDescriptor::with_counters(&[
        (ContentDomain::Main, 23),
        (ContentDomain::Modules, 9),
        (ContentDomain::Gallery, 32),
        (ContentDomain::Static, 4),
    ]);
    assert_eq!(
        DataUpdater::plan(&feeds, &set),
        vec![ContentDomain::Main, ContentDomain::Gallery]
    );
}

#[test]
fn test_plan_ignores_domains_absent_from_the_feed() {
    let temp = TempDir::new().unwrap();
    let set = ContentSet::open(&test_config(&temp)).unwrap();

    let feeds = FeedDescriptor::with_counters(&[(ContentDomain::Modules, 100)]);
    assert_eq!(DataUpdater::plan(&feeds, &set), vec![ContentDomain::Modules]);
}

#[tokio::test]
async fn test_disabled_updates_short_circuit() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp).without_remote_updates();
    let set = ContentSet::open(&config).unwrap();
    let updater = DataUpdater::new(config, ConnectivitySignal::new());

    assert!(matches!(
        updater.run_cycle(&set).await,
        UpdateSummary::Disabled
    ));
}

#[tokio::test]
async fn test_unreachable_feed_means_offline() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);
    let set = ContentSet::open(&config).unwrap();
    let connectivity = ConnectivitySignal::new();
    let updater = DataUpdater::new(config, connectivity.clone());

    let before = set.get(ContentDomain::Main).root();
    let summary = updater.run_cycle(&set).await;

    assert!(matches!(summary, UpdateSummary::Offline(_)));
    assert!(!connectivity.is_online());
    // Nothing was attempted; the held document is untouched
    assert!(std::sync::Arc::ptr_eq(
        &before,
        &set.get(ContentDomain::Main).root()
    ));
}
