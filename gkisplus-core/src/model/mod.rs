// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed views over the raw domain payloads.
//!
//! Every view is tolerant: unknown fields are ignored, missing fields take
//! their defaults, and a payload that does not match at all decodes to the
//! empty view (see `ContentRoot::decode`). The UI never sees a parse error
//! from this layer.

mod gallery;
mod main;
mod modules;
mod statics;

pub use gallery::{GalleryAlbum, GalleryData, GalleryPhoto};
pub use main::{
    CarouselBanner, FormLink, MainData, OffertoryAccount, VideoItem, WorshipService,
    YouTubePlaylist,
};
pub use modules::{AgendaEntry, EBook, ModulesData};
pub use statics::{StaticData, StaticFolder, StaticPage};
