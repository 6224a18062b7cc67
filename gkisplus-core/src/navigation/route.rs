// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Screen destinations.

use serde::{Deserialize, Serialize};

/// Identifier of one navigable screen. Closed set; the UI layer composes
/// whatever the current route names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Front page.
    Home,
    /// Worship service schedule.
    WorshipServices,
    /// Live stream listing.
    LiveStream,
    /// Devotional video playlists (SaRen, YKB).
    Devotional,
    /// Church form links.
    Forms,
    /// Weekly agenda.
    SeasonalAgenda,
    /// Gallery album overview.
    Gallery,
    /// One opened gallery album.
    GalleryAlbum,
    /// E-book library.
    Library,
    /// Opened PDF document.
    DocumentViewer,
    /// Static content folder overview.
    StaticFolder,
    /// One opened static page.
    StaticPage,
    /// In-app media (YouTube) player.
    MediaPlayer,
    /// In-app web view.
    WebView,
    /// App settings.
    Settings,
    /// About screen.
    About,
}

impl Route {
    /// Stable string tag, used for deep links and persistence.
    pub fn tag(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::WorshipServices => "worship-services",
            Route::LiveStream => "live-stream",
            Route::Devotional => "devotional",
            Route::Forms => "forms",
            Route::SeasonalAgenda => "seasonal-agenda",
            Route::Gallery => "gallery",
            Route::GalleryAlbum => "gallery-album",
            Route::Library => "library",
            Route::DocumentViewer => "document-viewer",
            Route::StaticFolder => "static-folder",
            Route::StaticPage => "static-page",
            Route::MediaPlayer => "media-player",
            Route::WebView => "web-view",
            Route::Settings => "settings",
            Route::About => "about",
        }
    }

    /// Inverse of [`Route::tag`].
    pub fn from_tag(tag: &str) -> Option<Route> {
        let route = match tag {
            "home" => Route::Home,
            "worship-services" => Route::WorshipServices,
            "live-stream" => Route::LiveStream,
            "devotional" => Route::Devotional,
            "forms" => Route::Forms,
            "seasonal-agenda" => Route::SeasonalAgenda,
            "gallery" => Route::Gallery,
            "gallery-album" => Route::GalleryAlbum,
            "library" => Route::Library,
            "document-viewer" => Route::DocumentViewer,
            "static-folder" => Route::StaticFolder,
            "static-page" => Route::StaticPage,
            "media-player" => Route::MediaPlayer,
            "web-view" => Route::WebView,
            "settings" => Route::Settings,
            "about" => Route::About,
            _ => return None,
        };
        Some(route)
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 16] = [
        Route::Home,
        Route::WorshipServices,
        Route::LiveStream,
        Route::Devotional,
        Route::Forms,
        Route::SeasonalAgenda,
        Route::Gallery,
        Route::GalleryAlbum,
        Route::Library,
        Route::DocumentViewer,
        Route::StaticFolder,
        Route::StaticPage,
        Route::MediaPlayer,
        Route::WebView,
        Route::Settings,
        Route::About,
    ];

    #[test]
    fn test_tag_round_trip() {
        for route in ALL {
            assert_eq!(Route::from_tag(route.tag()), Some(route));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Route::from_tag("no-such-screen"), None);
    }

    #[test]
    fn test_serde_matches_tag() {
        for route in ALL {
            let json = serde_json::to_string(&route).unwrap();
            assert_eq!(json, format!("\"{}\"", route.tag()));
        }
    }
}
