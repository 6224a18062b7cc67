// SPDX-FileCopyrightText: 2026 GKI Salatiga app contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Streamed download of binary assets (PDFs, gallery photos).
//!
//! The stream goes to a temp file that is renamed into place on completion,
//! so a finished file is always complete. Cancellation is cooperative: the
//! flag is checked once per received chunk while the loop is parked in I/O
//! between checks, and a cancelled or failed download removes its partial
//! temp file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::content::ContentConfig;
use crate::storage::SavedAsset;

/// Cloneable cancellation flag. All clones share one flag; flipping any of
/// them stops the download at the next chunk boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Downloads binary assets into the downloads directory.
pub struct FileDownloader {
    client: reqwest::Client,
    dest_dir: PathBuf,
    max_size: u64,
}

impl FileDownloader {
    /// Creates a downloader writing into `dest_dir`.
    ///
    /// Only the connection phase is bounded by the config timeout; a large
    /// PDF on a slow link may legitimately stream for longer than any
    /// whole-request budget.
    pub fn new(dest_dir: impl Into<PathBuf>, config: &ContentConfig) -> Result<Self, DownloadError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .user_agent(format!(
                "GKISalatigaPlus/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ));

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(FileDownloader {
            client: builder.build()?,
            dest_dir: dest_dir.into(),
            max_size: 64 * 1024 * 1024, // 64 MB, PDFs and photos only
        })
    }

    /// Downloads `url` into the destination directory as `filename`.
    ///
    /// `progress` is called after every chunk with (received, total); total
    /// is `None` when the server sent no content length. Returns the
    /// finished asset record; the caller persists it in the registry.
    pub async fn download<F>(
        &self,
        url: &str,
        filename: &str,
        cancel: &CancelFlag,
        progress: F,
    ) -> Result<SavedAsset, DownloadError>
    where
        F: FnMut(u64, Option<u64>),
    {
        fs::create_dir_all(&self.dest_dir)?;
        let final_path = self.dest_dir.join(filename);
        let temp_path = final_path.with_extension("part");

        let result = self
            .stream_to(url, &temp_path, &final_path, cancel, progress)
            .await;

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }

    async fn stream_to<F>(
        &self,
        url: &str,
        temp_path: &Path,
        final_path: &Path,
        cancel: &CancelFlag,
        mut progress: F,
    ) -> Result<SavedAsset, DownloadError>
    where
        F: FnMut(u64, Option<u64>),
    {
        let mut response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(DownloadError::Http(response.status().as_u16()));
        }

        let total = response.content_length();
        if let Some(len) = total {
            if len > self.max_size {
                return Err(DownloadError::TooLarge {
                    size: len,
                    max: self.max_size,
                });
            }
        }

        let mut file = fs::File::create(temp_path)?;
        let mut received: u64 = 0;

        while let Some(chunk) = response.chunk().await? {
            if cancel.is_cancelled() {
                return Err(DownloadError::Cancelled);
            }

            received += chunk.len() as u64;
            if received > self.max_size {
                return Err(DownloadError::TooLarge {
                    size: received,
                    max: self.max_size,
                });
            }

            file.write_all(&chunk)?;
            progress(received, total);
        }

        file.flush()?;
        drop(file);
        fs::rename(temp_path, final_path)?;

        tracing::debug!(url, path = %final_path.display(), bytes = received, "download finished");
        Ok(SavedAsset::new(url, final_path, received))
    }
}

/// Errors from the download helper.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Network/request error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local file I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset exceeds the size cap
    #[error("asset too large: {size} bytes (max {max})")]
    TooLarge {
        /// Bytes seen so far
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },

    /// Cancelled through the [`CancelFlag`]
    #[error("download cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_flag_is_shared_across_clones() {
        let flag = CancelFlag::new();
        let clone = flag.clone();
        assert!(!clone.is_cancelled());
        flag.cancel();
        assert!(clone.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_mid_stream_leaves_no_partial_file() {
        use std::io::{Read, Write as IoWrite};
        use std::net::TcpListener;

        // Drip-feeds a large body so the download spans many chunks
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1048576\r\n\r\n");
                let body = [0u8; 1024];
                for _ in 0..1024 {
                    if stream.write_all(&body).is_err() {
                        break;
                    }
                    let _ = stream.flush();
                    std::thread::sleep(std::time::Duration::from_millis(10));
                }
            }
        });

        let temp = tempfile::TempDir::new().unwrap();
        let config = ContentConfig {
            storage_path: temp.path().to_path_buf(),
            ..Default::default()
        };
        let downloader = FileDownloader::new(temp.path().join("downloads"), &config).unwrap();

        // Cancel as soon as the first chunk lands; the next chunk hits the flag
        let flag = CancelFlag::new();
        let cancel_after_first = flag.clone();
        let err = downloader
            .download(
                &format!("http://{addr}/warta.pdf"),
                "warta.pdf",
                &flag,
                move |_, _| cancel_after_first.cancel(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DownloadError::Cancelled));

        let dir = temp.path().join("downloads");
        assert!(!dir.join("warta.pdf").exists());
        assert!(!dir.join("warta.part").exists());
    }

    #[tokio::test]
    async fn test_failed_download_leaves_no_partial_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = ContentConfig {
            storage_path: temp.path().to_path_buf(),
            timeout: std::time::Duration::from_millis(200),
            ..Default::default()
        };
        let downloader = FileDownloader::new(temp.path().join("downloads"), &config).unwrap();

        // Nothing listens on this port; the request fails at connect
        let err = downloader
            .download("http://127.0.0.1:9/doc.pdf", "doc.pdf", &CancelFlag::new(), |_, _| {})
            .await
            .unwrap_err();
        assert!(matches!(err, DownloadError::Network(_)));

        let dir = temp.path().join("downloads");
        assert!(!dir.join("doc.pdf").exists());
        assert!(!dir.join("doc.part").exists());
    }
}
