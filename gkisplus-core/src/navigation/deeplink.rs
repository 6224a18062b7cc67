// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deep-link identifiers mapped to launch routes.
//!
//! External launch URLs carry a short identifier (the URL host or last path
//! segment). The mapping is consumed once at cold start.

use super::route::Route;

/// Resolution of one deep-link identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeepLinkTarget {
    /// Screen to open first.
    pub initial: Route,
    /// Route the back stack bottoms out at; `None` keeps the standard
    /// default (home).
    pub default_route: Option<Route>,
}

/// Maps the identifier carried by an external launch URL to a target.
///
/// Unknown identifiers resolve to `None` and the app launches normally.
pub fn resolve(identifier: &str) -> Option<DeepLinkTarget> {
    let target = match identifier {
        "main" | "home" => DeepLinkTarget {
            initial: Route::Home,
            default_route: None,
        },
        // Morning devotional broadcast and the YKB devotional booklets both
        // land on the devotional playlists screen.
        "saren" | "ykb" => DeepLinkTarget {
            initial: Route::Devotional,
            default_route: None,
        },
        "services" => DeepLinkTarget {
            initial: Route::WorshipServices,
            default_route: None,
        },
        "live" => DeepLinkTarget {
            initial: Route::LiveStream,
            default_route: None,
        },
        "agenda" => DeepLinkTarget {
            initial: Route::SeasonalAgenda,
            default_route: None,
        },
        "forms" => DeepLinkTarget {
            initial: Route::Forms,
            default_route: None,
        },
        "gallery" => DeepLinkTarget {
            initial: Route::Gallery,
            default_route: None,
        },
        "library" => DeepLinkTarget {
            initial: Route::Library,
            default_route: None,
        },
        "contributors" | "about" => DeepLinkTarget {
            initial: Route::About,
            default_route: Some(Route::Settings),
        },
        _ => return None,
    };
    Some(target)
}
