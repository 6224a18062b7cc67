// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed view of the main content domain.

use serde::{Deserialize, Serialize};

/// Everything shown on the front page and the video tabs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainData {
    /// Front-page banner carousel.
    pub carousel: Vec<CarouselBanner>,
    /// Sunday and midweek worship service schedule.
    pub services: Vec<WorshipService>,
    /// YouTube playlists shown on the video tabs (SaRen, full services, ...).
    pub broadcasts: Vec<YouTubePlaylist>,
    /// Church form links (baptism, membership, hall booking).
    pub forms: Vec<FormLink>,
    /// Offertory bank accounts.
    pub offertory: Vec<OffertoryAccount>,
}

/// One front-page banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselBanner {
    pub title: String,
    /// Banner image URL.
    pub banner: String,
    /// Target kind: "yt" opens the media player, "url" the web view.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// One scheduled worship service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorshipService {
    pub name: String,
    pub time: String,
    pub place: String,
    /// Live stream link; empty when the service is not streamed.
    pub link: String,
}

/// A YouTube playlist with its pre-resolved items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YouTubePlaylist {
    pub title: String,
    #[serde(rename = "playlist-id")]
    pub playlist_id: String,
    pub content: Vec<VideoItem>,
}

/// One video inside a playlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoItem {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub date: String,
    pub desc: String,
}

/// One church form link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLink {
    pub title: String,
    pub url: String,
}

/// One offertory bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffertoryAccount {
    pub bank: String,
    pub number: String,
    pub holder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bundled_main_payload() {
        use crate::content::{ContentDomain, ContentRoot};

        let root =
            ContentRoot::parse(ContentDomain::Main, ContentDomain::Main.bundled().as_bytes())
                .unwrap();
        let data: MainData = root.decode();

        assert!(!data.carousel.is_empty());
        assert!(!data.services.is_empty());
        assert_eq!(data.carousel[0].kind, "yt");
        assert!(data.broadcasts.iter().any(|p| !p.playlist_id.is_empty()));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = r#"{"carousel": [{"title": "x", "banner": "b", "type": "url", "url": "u", "extra": 1}]}"#;
        let data: MainData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.carousel.len(), 1);
        assert_eq!(data.carousel[0].kind, "url");
    }
}
