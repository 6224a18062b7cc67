// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed view of the modules domain: e-book library and weekly agenda.

use serde::{Deserialize, Serialize};

/// Payload of the modules domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesData {
    /// Downloadable PDF library.
    pub library: Vec<EBook>,
    /// Recurring weekly agenda entries.
    pub agenda: Vec<AgendaEntry>,
}

/// One downloadable PDF document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EBook {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub url: String,
    pub thumbnail: String,
    #[serde(rename = "size-bytes")]
    pub size_bytes: u64,
}

/// One recurring weekly agenda entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaEntry {
    /// Lowercase Indonesian day name ("senin" .. "minggu").
    pub day: String,
    pub name: String,
    pub time: String,
    pub place: String,
    /// Hosting commission or group.
    pub representative: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bundled_modules_payload() {
        use crate::content::{ContentDomain, ContentRoot};

        let root = ContentRoot::parse(
            ContentDomain::Modules,
            ContentDomain::Modules.bundled().as_bytes(),
        )
        .unwrap();
        let data: ModulesData = root.decode();

        assert!(!data.library.is_empty());
        assert!(data.library.iter().all(|b| b.url.ends_with(".pdf")));
        assert!(data.agenda.iter().any(|a| a.day == "rabu"));
    }
}
