// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed view of the gallery domain.

use serde::{Deserialize, Serialize};

/// Payload of the gallery domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryData {
    pub albums: Vec<GalleryAlbum>,
}

/// One photo album, backed by a cloud drive folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryAlbum {
    pub title: String,
    #[serde(rename = "folder-id")]
    pub folder_id: String,
    #[serde(rename = "last-update")]
    pub last_update: String,
    pub photos: Vec<GalleryPhoto>,
}

/// One photo inside an album.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryPhoto {
    /// Cloud drive file id.
    pub id: String,
    pub name: String,
    pub date: String,
}
