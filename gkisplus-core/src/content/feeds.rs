// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Feed descriptor: the small remote JSON gating refreshes.
//!
//! The backend bumps a per-domain counter whenever it publishes a new
//! document. A domain is only re-downloaded when its remote counter is
//! strictly greater than the counter of the document we already hold.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::domain::ContentDomain;

/// Remote filename of the feed descriptor, relative to the base URL.
pub const FEEDS_FILENAME: &str = "gkisplus-feeds.json";

/// Per-domain update counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedDescriptor {
    /// Descriptor schema version.
    #[serde(rename = "schema-version")]
    pub schema_version: u32,
    /// Update counter per domain feed key.
    pub counters: HashMap<String, u64>,
}

impl FeedDescriptor {
    /// Counter for one domain; `None` when the feed does not mention it.
    pub fn counter(&self, domain: ContentDomain) -> Option<u64> {
        self.counters.get(domain.feed_key()).copied()
    }

    /// Test/seed helper: a descriptor with the given counters.
    pub fn with_counters(counters: &[(ContentDomain, u64)]) -> Self {
        FeedDescriptor {
            schema_version: 1,
            counters: counters
                .iter()
                .map(|(d, c)| (d.feed_key().to_string(), *c))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor() {
        let raw = r#"{
            "schema-version": 1,
            "counters": {"main": 23, "modules": 9, "gallery": 31, "static": 5}
        }"#;
        let feeds: FeedDescriptor = serde_json::from_str(raw).unwrap();
        assert_eq!(feeds.counter(ContentDomain::Main), Some(23));
        assert_eq!(feeds.counter(ContentDomain::Static), Some(5));
    }

    #[test]
    fn test_missing_domain_counter_is_none() {
        let feeds: FeedDescriptor = serde_json::from_str(r#"{"counters": {"main": 1}}"#).unwrap();
        assert_eq!(feeds.counter(ContentDomain::Gallery), None);
    }
}
