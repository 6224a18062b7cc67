// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP fetcher for content documents and the feed descriptor.

use reqwest::Client;
use thiserror::Error;

use super::config::ContentConfig;
use super::domain::ContentDomain;
use super::feeds::{FeedDescriptor, FEEDS_FILENAME};

/// Fetches documents from the content backend.
pub struct ContentFetcher {
    client: Client,
    base_url: String,
    max_content_size: u64,
}

impl ContentFetcher {
    /// Creates a fetcher from the content config.
    pub fn new(config: &ContentConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().timeout(config.timeout).user_agent(format!(
            "GKISalatigaPlus/{}",
            option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
        ));

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(ContentFetcher {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            max_content_size: config.max_content_size,
        })
    }

    /// Fetches the feed descriptor.
    pub async fn fetch_feeds(&self) -> Result<FeedDescriptor, FetchError> {
        let url = format!("{}/{}", self.base_url, FEEDS_FILENAME);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        let feeds: FeedDescriptor = response.json().await?;
        Ok(feeds)
    }

    /// Fetches one domain's full document as raw bytes.
    pub async fn fetch_document(&self, domain: ContentDomain) -> Result<Vec<u8>, FetchError> {
        let url = format!("{}/{}", self.base_url, domain.remote_path());
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        // Check content length before downloading
        if let Some(len) = response.content_length() {
            if len > self.max_content_size {
                return Err(FetchError::TooLarge {
                    size: len,
                    max: self.max_content_size,
                });
            }
        }

        let data = response.bytes().await?.to_vec();

        // Verify size after download (in case content-length was missing)
        if data.len() as u64 > self.max_content_size {
            return Err(FetchError::TooLarge {
                size: data.len() as u64,
                max: self.max_content_size,
            });
        }

        Ok(data)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Errors that can occur during content fetching.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Network/request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Document too large
    #[error("Document too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },
}
