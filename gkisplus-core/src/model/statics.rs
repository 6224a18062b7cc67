// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed view of the static content domain.

use serde::{Deserialize, Serialize};

/// Payload of the static content domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticData {
    pub folders: Vec<StaticFolder>,
}

/// One folder of static pages (church profile, commissions, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticFolder {
    pub title: String,
    /// Banner image URL.
    pub banner: String,
    pub contents: Vec<StaticPage>,
}

/// One static HTML page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticPage {
    pub title: String,
    pub subtitle: String,
    /// Pre-rendered HTML body, shown in the app's web view.
    pub html: String,
}
