//! Mobile-friendly data types.
//!
//! These types are wrappers around gkisplus-core types that are compatible
//! with UniFFI for cross-language bindings.

use gkisplus_core::{BackOutcome, ContentDomain, ContentMeta, PrefKey, PrefValue, Route};

/// Mobile-friendly route enum, one variant per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileRoute {
    Home,
    WorshipServices,
    LiveStream,
    Devotional,
    Forms,
    SeasonalAgenda,
    Gallery,
    GalleryAlbum,
    Library,
    DocumentViewer,
    StaticFolder,
    StaticPage,
    MediaPlayer,
    WebView,
    Settings,
    About,
}

impl From<Route> for MobileRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => MobileRoute::Home,
            Route::WorshipServices => MobileRoute::WorshipServices,
            Route::LiveStream => MobileRoute::LiveStream,
            Route::Devotional => MobileRoute::Devotional,
            Route::Forms => MobileRoute::Forms,
            Route::SeasonalAgenda => MobileRoute::SeasonalAgenda,
            Route::Gallery => MobileRoute::Gallery,
            Route::GalleryAlbum => MobileRoute::GalleryAlbum,
            Route::Library => MobileRoute::Library,
            Route::DocumentViewer => MobileRoute::DocumentViewer,
            Route::StaticFolder => MobileRoute::StaticFolder,
            Route::StaticPage => MobileRoute::StaticPage,
            Route::MediaPlayer => MobileRoute::MediaPlayer,
            Route::WebView => MobileRoute::WebView,
            Route::Settings => MobileRoute::Settings,
            Route::About => MobileRoute::About,
        }
    }
}

impl From<MobileRoute> for Route {
    fn from(route: MobileRoute) -> Self {
        match route {
            MobileRoute::Home => Route::Home,
            MobileRoute::WorshipServices => Route::WorshipServices,
            MobileRoute::LiveStream => Route::LiveStream,
            MobileRoute::Devotional => Route::Devotional,
            MobileRoute::Forms => Route::Forms,
            MobileRoute::SeasonalAgenda => Route::SeasonalAgenda,
            MobileRoute::Gallery => Route::Gallery,
            MobileRoute::GalleryAlbum => Route::GalleryAlbum,
            MobileRoute::Library => Route::Library,
            MobileRoute::DocumentViewer => Route::DocumentViewer,
            MobileRoute::StaticFolder => Route::StaticFolder,
            MobileRoute::StaticPage => Route::StaticPage,
            MobileRoute::MediaPlayer => Route::MediaPlayer,
            MobileRoute::WebView => Route::WebView,
            MobileRoute::Settings => Route::Settings,
            MobileRoute::About => Route::About,
        }
    }
}

/// Result of a back gesture. `AtRoot` leaves the exit decision to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileBackOutcome {
    Moved { route: MobileRoute },
    AtRoot { route: MobileRoute },
}

impl From<BackOutcome> for MobileBackOutcome {
    fn from(outcome: BackOutcome) -> Self {
        match outcome {
            BackOutcome::Moved(route) => MobileBackOutcome::Moved {
                route: route.into(),
            },
            BackOutcome::AtRoot(route) => MobileBackOutcome::AtRoot {
                route: route.into(),
            },
        }
    }
}

/// Content domain for mobile platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileContentDomain {
    /// Carousel, services, broadcasts, forms, offertory
    Main,
    /// E-book library and seasonal agenda
    Modules,
    /// Photo albums
    Gallery,
    /// Church-profile static pages
    Static,
}

impl From<MobileContentDomain> for ContentDomain {
    fn from(domain: MobileContentDomain) -> Self {
        match domain {
            MobileContentDomain::Main => ContentDomain::Main,
            MobileContentDomain::Modules => ContentDomain::Modules,
            MobileContentDomain::Gallery => ContentDomain::Gallery,
            MobileContentDomain::Static => ContentDomain::Static,
        }
    }
}

impl From<ContentDomain> for MobileContentDomain {
    fn from(domain: ContentDomain) -> Self {
        match domain {
            ContentDomain::Main => MobileContentDomain::Main,
            ContentDomain::Modules => MobileContentDomain::Modules,
            ContentDomain::Gallery => MobileContentDomain::Gallery,
            ContentDomain::Static => MobileContentDomain::Static,
        }
    }
}

/// Metadata block of a content document.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileContentMeta {
    pub update_count: u64,
    pub last_update: String,
    pub schema_version: u32,
    pub last_updated_item: String,
    pub last_actor: String,
}

impl From<&ContentMeta> for MobileContentMeta {
    fn from(meta: &ContentMeta) -> Self {
        MobileContentMeta {
            update_count: meta.update_count,
            last_update: meta.last_update.clone(),
            schema_version: meta.schema_version,
            last_updated_item: meta.last_updated_item.clone(),
            last_actor: meta.last_actor.clone(),
        }
    }
}

/// Preference keys exposed to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobilePrefKey {
    RefreshIntervalMillis,
    RefreshHour,
    RefreshMinute,
    LaunchCount,
    ColdStartRoute,
    LastBackgroundRun,
    OfflineBannerDismissed,
    TextScale,
}

impl From<MobilePrefKey> for PrefKey {
    fn from(key: MobilePrefKey) -> Self {
        match key {
            MobilePrefKey::RefreshIntervalMillis => PrefKey::RefreshIntervalMillis,
            MobilePrefKey::RefreshHour => PrefKey::RefreshHour,
            MobilePrefKey::RefreshMinute => PrefKey::RefreshMinute,
            MobilePrefKey::LaunchCount => PrefKey::LaunchCount,
            MobilePrefKey::ColdStartRoute => PrefKey::ColdStartRoute,
            MobilePrefKey::LastBackgroundRun => PrefKey::LastBackgroundRun,
            MobilePrefKey::OfflineBannerDismissed => PrefKey::OfflineBannerDismissed,
            MobilePrefKey::TextScale => PrefKey::TextScale,
        }
    }
}

/// Tagged preference value.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum MobilePrefValue {
    Long { value: i64 },
    Int { value: i32 },
    Text { value: String },
    Flag { value: bool },
    Real { value: f64 },
}

impl From<PrefValue> for MobilePrefValue {
    fn from(value: PrefValue) -> Self {
        match value {
            PrefValue::Long(v) => MobilePrefValue::Long { value: v },
            PrefValue::Int(v) => MobilePrefValue::Int { value: v },
            PrefValue::Text(v) => MobilePrefValue::Text { value: v },
            PrefValue::Flag(v) => MobilePrefValue::Flag { value: v },
            PrefValue::Real(v) => MobilePrefValue::Real { value: v },
        }
    }
}

impl From<MobilePrefValue> for PrefValue {
    fn from(value: MobilePrefValue) -> Self {
        match value {
            MobilePrefValue::Long { value } => PrefValue::Long(value),
            MobilePrefValue::Int { value } => PrefValue::Int(value),
            MobilePrefValue::Text { value } => PrefValue::Text(value),
            MobilePrefValue::Flag { value } => PrefValue::Flag(value),
            MobilePrefValue::Real { value } => PrefValue::Real(value),
        }
    }
}

/// One failed domain refresh.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileRefreshFailure {
    /// The domain that failed
    pub domain: MobileContentDomain,
    /// The error message
    pub error: String,
}

/// Result of a refresh cycle.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum MobileUpdateSummary {
    /// Remote updates are disabled
    Disabled,
    /// The feed descriptor could not be fetched; nothing was attempted
    Offline { error: String },
    /// The cycle ran (all lists may be empty when everything was current)
    Completed {
        /// Domains that swapped in a new document
        applied: Vec<MobileContentDomain>,
        /// Domains that failed with error messages
        failed: Vec<MobileRefreshFailure>,
        /// Domains already up to date
        skipped: Vec<MobileContentDomain>,
    },
}

#[cfg(feature = "content-updates")]
impl From<gkisplus_core::UpdateSummary> for MobileUpdateSummary {
    fn from(summary: gkisplus_core::UpdateSummary) -> Self {
        match summary {
            gkisplus_core::UpdateSummary::Disabled => MobileUpdateSummary::Disabled,
            gkisplus_core::UpdateSummary::Offline(error) => MobileUpdateSummary::Offline { error },
            gkisplus_core::UpdateSummary::Completed {
                applied,
                failed,
                skipped,
            } => MobileUpdateSummary::Completed {
                applied: applied.into_iter().map(Into::into).collect(),
                failed: failed
                    .into_iter()
                    .map(|(domain, error)| MobileRefreshFailure {
                        domain: domain.into(),
                        error,
                    })
                    .collect(),
                skipped: skipped.into_iter().map(Into::into).collect(),
            },
        }
    }
}
