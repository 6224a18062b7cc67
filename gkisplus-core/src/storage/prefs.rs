// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed preference store.
//!
//! Values are a tagged sum type and every read/write matches exhaustively:
//! adding a variant is a compile error until every site handles it. Each key
//! declares its variant through its hardcoded default, and writes with a
//! mismatched variant are rejected.

use rusqlite::params;

use super::{Storage, StorageError};

/// A preference value.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefValue {
    Long(i64),
    Int(i32),
    Text(String),
    Flag(bool),
    Real(f64),
}

impl PrefValue {
    /// Variant tag stored alongside the value.
    pub fn kind(&self) -> &'static str {
        match self {
            PrefValue::Long(_) => "long",
            PrefValue::Int(_) => "int",
            PrefValue::Text(_) => "text",
            PrefValue::Flag(_) => "flag",
            PrefValue::Real(_) => "real",
        }
    }

    fn encode(&self) -> String {
        match self {
            PrefValue::Long(v) => v.to_string(),
            PrefValue::Int(v) => v.to_string(),
            PrefValue::Text(v) => v.clone(),
            PrefValue::Flag(v) => v.to_string(),
            PrefValue::Real(v) => v.to_string(),
        }
    }

    fn decode(kind: &str, raw: &str) -> Option<PrefValue> {
        match kind {
            "long" => raw.parse().ok().map(PrefValue::Long),
            "int" => raw.parse().ok().map(PrefValue::Int),
            "text" => Some(PrefValue::Text(raw.to_string())),
            "flag" => raw.parse().ok().map(PrefValue::Flag),
            "real" => raw.parse().ok().map(PrefValue::Real),
            _ => None,
        }
    }
}

/// Named settings, each with a hardcoded default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKey {
    /// Minimum interval between scheduled refresh cycles, milliseconds.
    RefreshIntervalMillis,
    /// Local wall-clock hour the background refresh runs.
    RefreshHour,
    /// Minute of the refresh hour.
    RefreshMinute,
    /// Number of cold starts so far.
    LaunchCount,
    /// Route tag to open on the next cold start (deep-link entry point);
    /// empty when none is pending.
    ColdStartRoute,
    /// Unix timestamp of the last completed background run.
    LastBackgroundRun,
    /// Whether the user dismissed the offline banner.
    OfflineBannerDismissed,
    /// UI text scale factor.
    TextScale,
}

impl PrefKey {
    /// Stable key name in the preferences table.
    pub fn name(&self) -> &'static str {
        match self {
            PrefKey::RefreshIntervalMillis => "refresh-interval-millis",
            PrefKey::RefreshHour => "refresh-hour",
            PrefKey::RefreshMinute => "refresh-minute",
            PrefKey::LaunchCount => "launch-count",
            PrefKey::ColdStartRoute => "cold-start-route",
            PrefKey::LastBackgroundRun => "last-background-run",
            PrefKey::OfflineBannerDismissed => "offline-banner-dismissed",
            PrefKey::TextScale => "text-scale",
        }
    }

    /// Hardcoded default, also declaring the key's variant.
    pub fn default_value(&self) -> PrefValue {
        match self {
            PrefKey::RefreshIntervalMillis => PrefValue::Long(86_400_000),
            PrefKey::RefreshHour => PrefValue::Int(4),
            PrefKey::RefreshMinute => PrefValue::Int(0),
            PrefKey::LaunchCount => PrefValue::Int(0),
            PrefKey::ColdStartRoute => PrefValue::Text(String::new()),
            PrefKey::LastBackgroundRun => PrefValue::Long(0),
            PrefKey::OfflineBannerDismissed => PrefValue::Flag(false),
            PrefKey::TextScale => PrefValue::Real(1.0),
        }
    }
}

impl Storage {
    /// Reads a preference; unset keys yield the hardcoded default.
    pub fn pref(&self, key: PrefKey) -> Result<PrefValue, StorageError> {
        let row = self.conn.query_row(
            "SELECT kind, value FROM preferences WHERE key = ?1",
            params![key.name()],
            |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)),
        );

        match row {
            Ok((kind, raw)) => PrefValue::decode(&kind, &raw).ok_or_else(|| {
                StorageError::Serialization(format!("corrupt preference {}", key.name()))
            }),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(key.default_value()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes a preference. The value's variant must match the key's
    /// declared variant.
    pub fn set_pref(&self, key: PrefKey, value: PrefValue) -> Result<(), StorageError> {
        let expected = key.default_value().kind();
        if value.kind() != expected {
            return Err(StorageError::TypeMismatch {
                key: key.name(),
                expected,
                got: value.kind(),
            });
        }

        self.conn.execute(
            "INSERT INTO preferences (key, kind, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET kind = ?2, value = ?3",
            params![key.name(), value.kind(), value.encode()],
        )?;
        Ok(())
    }

    /// Convenience accessor for `Long` keys.
    pub fn pref_long(&self, key: PrefKey) -> Result<i64, StorageError> {
        match self.pref(key)? {
            PrefValue::Long(v) => Ok(v),
            other => Err(StorageError::TypeMismatch {
                key: key.name(),
                expected: "long",
                got: other.kind(),
            }),
        }
    }

    /// Convenience accessor for `Int` keys.
    pub fn pref_int(&self, key: PrefKey) -> Result<i32, StorageError> {
        match self.pref(key)? {
            PrefValue::Int(v) => Ok(v),
            other => Err(StorageError::TypeMismatch {
                key: key.name(),
                expected: "int",
                got: other.kind(),
            }),
        }
    }

    /// Convenience accessor for `Text` keys.
    pub fn pref_text(&self, key: PrefKey) -> Result<String, StorageError> {
        match self.pref(key)? {
            PrefValue::Text(v) => Ok(v),
            other => Err(StorageError::TypeMismatch {
                key: key.name(),
                expected: "text",
                got: other.kind(),
            }),
        }
    }

    /// Convenience accessor for `Flag` keys.
    pub fn pref_flag(&self, key: PrefKey) -> Result<bool, StorageError> {
        match self.pref(key)? {
            PrefValue::Flag(v) => Ok(v),
            other => Err(StorageError::TypeMismatch {
                key: key.name(),
                expected: "flag",
                got: other.kind(),
            }),
        }
    }

    /// Convenience accessor for `Real` keys.
    pub fn pref_real(&self, key: PrefKey) -> Result<f64, StorageError> {
        match self.pref(key)? {
            PrefValue::Real(v) => Ok(v),
            other => Err(StorageError::TypeMismatch {
                key: key.name(),
                expected: "real",
                got: other.kind(),
            }),
        }
    }
}
