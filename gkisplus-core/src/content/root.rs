// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsed in-memory representation of one content document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::ContentDomain;

/// The `meta` block every content document carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentMeta {
    /// Monotonically increasing update counter for this domain. Compared
    /// against the feed descriptor to decide whether to re-download.
    #[serde(rename = "update-count")]
    pub update_count: u64,
    /// ISO 8601 timestamp of the last backend update.
    #[serde(rename = "last-update")]
    pub last_update: String,
    /// Document schema version.
    #[serde(rename = "schema-version")]
    pub schema_version: u32,
    /// Label of the most recently updated item.
    #[serde(rename = "last-updated-item")]
    pub last_updated_item: String,
    /// Backend actor who made the last update.
    #[serde(rename = "last-actor")]
    pub last_actor: String,
}

/// Fully parsed content document for one domain.
///
/// Replaced wholesale on refresh, never merged field by field; readers hold
/// an `Arc<ContentRoot>` snapshot and can never observe a half-updated tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRoot {
    domain: ContentDomain,
    meta: ContentMeta,
    payload: Value,
}

impl ContentRoot {
    /// Parses a raw document. The domain payload lives under the domain's
    /// payload key, the meta block under `meta`.
    ///
    /// A missing or malformed `meta` block is logged and substituted with an
    /// empty one; only a document that is not JSON at all is an error.
    pub fn parse(domain: ContentDomain, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let doc: Value = serde_json::from_slice(bytes)?;
        let meta = match doc.get("meta") {
            Some(meta) => serde_json::from_value(meta.clone()).unwrap_or_else(|e| {
                tracing::warn!(domain = %domain, error = %e, "malformed meta block, using empty meta");
                ContentMeta::default()
            }),
            None => {
                tracing::warn!(domain = %domain, "document has no meta block");
                ContentMeta::default()
            }
        };
        let payload = doc.get(domain.payload_key()).cloned().unwrap_or(Value::Null);
        Ok(ContentRoot {
            domain,
            meta,
            payload,
        })
    }

    /// Structurally empty document.
    pub fn empty(domain: ContentDomain) -> Self {
        ContentRoot {
            domain,
            meta: ContentMeta::default(),
            payload: Value::Null,
        }
    }

    pub fn domain(&self) -> ContentDomain {
        self.domain
    }

    pub fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    /// Raw domain payload (the subtree under the domain's payload key).
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Decodes the payload into a typed view.
    ///
    /// A payload that does not match the view is logged and substituted with
    /// `T::default()`; callers always receive a structurally valid value and
    /// never see a parse error.
    pub fn decode<T>(&self) -> T
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match serde_json::from_value(self.payload.clone()) {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(
                    domain = %self.domain,
                    error = %e,
                    "payload does not match typed view, substituting empty"
                );
                T::default()
            }
        }
    }
}
