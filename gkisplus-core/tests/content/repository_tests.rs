// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use gkisplus_core::{ContentDomain, ContentRepository, ContentSet};
use tempfile::TempDir;

use super::test_config;

#[test]
fn test_cold_start_serves_bundled_fallback() {
    let temp = TempDir::new().unwrap();
    let repo = ContentRepository::open(ContentDomain::Main, &test_config(&temp)).unwrap();

    let root = repo.root();
    assert_eq!(root.meta().update_count, 22);
    assert_eq!(root.meta().schema_version, 2);

    // The served payload is exactly the bundled document's data subtree
    let bundled: serde_json::Value =
        serde_json::from_str(ContentDomain::Main.bundled()).unwrap();
    assert_eq!(root.payload(), &bundled["data"]);
}

#[test]
fn test_open_materializes_the_cache_file() {
    let temp = TempDir::new().unwrap();
    let _repo = ContentRepository::open(ContentDomain::Modules, &test_config(&temp)).unwrap();

    let cache_file = temp
        .path()
        .join("content")
        .join(ContentDomain::Modules.cache_filename());
    assert!(cache_file.exists());
}

#[test]
fn test_valid_cache_wins_over_bundled() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let cache_dir = temp.path().join("content");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(
        cache_dir.join(ContentDomain::Main.cache_filename()),
        r#"{"meta":{"update-count":99,"schema-version":2},"data":{"carousel":[]}}"#,
    )
    .unwrap();

    let repo = ContentRepository::open(ContentDomain::Main, &config).unwrap();
    assert_eq!(repo.root().meta().update_count, 99);
}

#[test]
fn test_corrupt_cache_falls_back_to_bundled() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let cache_dir = temp.path().join("content");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(
        cache_dir.join(ContentDomain::Main.cache_filename()),
        b"{not json at all",
    )
    .unwrap();

    let repo = ContentRepository::open(ContentDomain::Main, &config).unwrap();
    // The bundled document serves reads; the corrupt file is not an error
    assert_eq!(repo.root().meta().update_count, 22);
}

#[test]
fn test_content_set_opens_all_domains() {
    let temp = TempDir::new().unwrap();
    let set = ContentSet::open(&test_config(&temp)).unwrap();

    let counters: Vec<u64> = set.iter().map(|r| r.root().meta().update_count).collect();
    // Bundled counters: main, modules, gallery, static
    assert_eq!(counters, vec![22, 9, 31, 5]);
}

#[test]
fn test_load_current_is_stable_without_changes() {
    let temp = TempDir::new().unwrap();
    let repo = ContentRepository::open(ContentDomain::Gallery, &test_config(&temp)).unwrap();

    let first = repo.load_current();
    let second = repo.load_current();
    assert_eq!(first.meta(), second.meta());
    assert_eq!(first.payload(), second.payload());
}

#[cfg(feature = "content-updates")]
mod refresh {
    use std::sync::Arc;

    use gkisplus_core::{ContentDomain, ContentError, ContentFetcher, ContentRepository};
    use tempfile::TempDir;

    use super::super::test_config;

    #[tokio::test]
    async fn test_failed_refresh_retains_previous_root() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        let repo = ContentRepository::open(ContentDomain::Main, &config).unwrap();
        let fetcher = ContentFetcher::new(&config).unwrap();

        let before = repo.root();
        let err = repo.refresh_from_network(&fetcher, true).await.unwrap_err();
        assert!(matches!(err, ContentError::Fetch(_)));

        // The exact same snapshot stays live, not just an equal one
        assert!(Arc::ptr_eq(&before, &repo.root()));
    }
}
