// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content domain identifiers.

use serde::{Deserialize, Serialize};

/// One independently fetched JSON dataset.
///
/// Every domain carries its own cache file, bundled fallback, remote path,
/// and feed counter; they never block each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentDomain {
    /// Front-page content: carousel, worship services, broadcasts, forms,
    /// offertory accounts.
    Main,
    /// App modules: e-book library and the weekly agenda.
    Modules,
    /// Photo gallery albums.
    Gallery,
    /// Static HTML content folders (church profile, commissions, ...).
    Static,
}

impl ContentDomain {
    /// All domains, in refresh order.
    pub const ALL: [ContentDomain; 4] = [
        ContentDomain::Main,
        ContentDomain::Modules,
        ContentDomain::Gallery,
        ContentDomain::Static,
    ];

    /// Fixed cache filename inside the app's private storage.
    pub fn cache_filename(&self) -> &'static str {
        match self {
            ContentDomain::Main => "gkisplus-main.json",
            ContentDomain::Modules => "gkisplus-modules.json",
            ContentDomain::Gallery => "gkisplus-gallery.json",
            ContentDomain::Static => "gkisplus-static.json",
        }
    }

    /// Path of the document relative to the content base URL.
    ///
    /// Remote layout mirrors the cache filenames.
    pub fn remote_path(&self) -> &'static str {
        self.cache_filename()
    }

    /// Top-level key of the domain payload, next to the shared `meta` block.
    pub fn payload_key(&self) -> &'static str {
        match self {
            ContentDomain::Main => "data",
            ContentDomain::Modules => "modules",
            ContentDomain::Gallery => "gallery",
            ContentDomain::Static => "static",
        }
    }

    /// Key of this domain's counter in the feed descriptor.
    pub fn feed_key(&self) -> &'static str {
        match self {
            ContentDomain::Main => "main",
            ContentDomain::Modules => "modules",
            ContentDomain::Gallery => "gallery",
            ContentDomain::Static => "static",
        }
    }

    /// Bundled fallback document, compiled into the binary.
    pub fn bundled(&self) -> &'static str {
        match self {
            ContentDomain::Main => include_str!("../../assets/fallback/gkisplus-main.json"),
            ContentDomain::Modules => include_str!("../../assets/fallback/gkisplus-modules.json"),
            ContentDomain::Gallery => include_str!("../../assets/fallback/gkisplus-gallery.json"),
            ContentDomain::Static => include_str!("../../assets/fallback/gkisplus-static.json"),
        }
    }
}

impl std::fmt::Display for ContentDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.feed_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_documents_are_valid_json() {
        for domain in ContentDomain::ALL {
            let doc: serde_json::Value =
                serde_json::from_str(domain.bundled()).expect("bundled document must parse");
            assert!(doc.get("meta").is_some(), "{domain} is missing meta");
            assert!(
                doc.get(domain.payload_key()).is_some(),
                "{domain} is missing its payload key"
            );
        }
    }

    #[test]
    fn test_cache_filenames_are_distinct() {
        let names: std::collections::HashSet<_> = ContentDomain::ALL
            .iter()
            .map(|d| d.cache_filename())
            .collect();
        assert_eq!(names.len(), ContentDomain::ALL.len());
    }
}
