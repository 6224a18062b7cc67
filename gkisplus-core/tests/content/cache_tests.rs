// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

use gkisplus_core::{ContentCache, ContentDomain};
use tempfile::TempDir;

#[test]
fn test_cache_survives_reopen() {
    let temp = TempDir::new().unwrap();
    {
        let cache = ContentCache::new(temp.path()).unwrap();
        cache
            .write(ContentDomain::Static, br#"{"meta":{},"static":{}}"#)
            .unwrap();
    }

    let cache = ContentCache::new(temp.path()).unwrap();
    assert_eq!(
        cache.read(ContentDomain::Static).unwrap(),
        br#"{"meta":{},"static":{}}"#
    );
}

#[test]
fn test_overwrite_replaces_whole_document() {
    let temp = TempDir::new().unwrap();
    let cache = ContentCache::new(temp.path()).unwrap();

    cache.write(ContentDomain::Main, b"first version").unwrap();
    cache.write(ContentDomain::Main, b"second").unwrap();
    // No trailing bytes of the longer first write survive
    assert_eq!(cache.read(ContentDomain::Main).unwrap(), b"second");
}

#[test]
fn test_remove_then_read_is_none() {
    let temp = TempDir::new().unwrap();
    let cache = ContentCache::new(temp.path()).unwrap();

    cache.write(ContentDomain::Gallery, b"{}").unwrap();
    cache.remove(ContentDomain::Gallery).unwrap();
    assert!(cache.read(ContentDomain::Gallery).is_none());
    assert!(!cache.exists(ContentDomain::Gallery));
}
