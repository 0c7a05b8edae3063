//! Streamed single-image download

use crate::photos::link::DownloadRequest;
use crate::utils::config::{AppSettings, BROWSER_USER_AGENT};
use crate::utils::error::ImageFetchError;
use futures::StreamExt;
use reqwest::{Client, Response};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// HTTP image downloader
pub struct ImageFetcher {
    client: Client,
    chunk_size: usize,
}

impl ImageFetcher {
    /// Build the HTTP client from settings.
    ///
    /// The client always presents a desktop browser User-Agent; some image
    /// hosts reject the default reqwest one.
    pub fn new(settings: &AppSettings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(BROWSER_USER_AGENT);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            chunk_size: settings.chunk_size.max(1),
        })
    }

    /// Resolve, download and report one link, then pause for `request_delay`.
    ///
    /// The outcome line is printed whatever happens; the result is returned
    /// for callers that want to act on it.
    pub async fn download_and_report(
        &self,
        source_url: &str,
        settings: &AppSettings,
    ) -> Result<PathBuf, ImageFetchError> {
        let source_url = source_url.trim();
        let result = match DownloadRequest::new(source_url, &settings.photos_dir) {
            Ok(request) => {
                if request.was_rewritten() {
                    info!("Rewrote {} to {}", request.source_url, request.resolved_url);
                }
                self.fetch(&request).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!(kind = ?e.kind(), "image download failed: {}", e);
        }
        println!("{}", outcome_message(source_url, &result));

        tokio::time::sleep(settings.request_delay).await;
        result
    }

    /// Download the image described by `request`
    pub async fn fetch(&self, request: &DownloadRequest) -> Result<PathBuf, ImageFetchError> {
        self.download_image(&request.resolved_url, &request.destination_path)
            .await
    }

    /// Stream `url` into `destination`.
    ///
    /// The parent folder must already exist. Non-2xx answers fail before the
    /// file is created; a failure while streaming removes the partial file.
    pub async fn download_image(
        &self,
        url: &str,
        destination: &Path,
    ) -> Result<PathBuf, ImageFetchError> {
        debug!("Requesting {} -> {:?}", url, destination);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ImageFetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let mut file = File::create(destination)
            .await
            .map_err(|source| ImageFetchError::Io {
                path: destination.to_path_buf(),
                source,
            })?;

        let streamed = self.stream_to_file(url, response, &mut file, destination).await;
        drop(file);

        match streamed {
            Ok(written) => {
                info!("Saved {} bytes from {} to {:?}", written, url, destination);
                Ok(destination.to_path_buf())
            }
            Err(e) => {
                remove_partial(destination).await;
                Err(e)
            }
        }
    }

    async fn stream_to_file(
        &self,
        url: &str,
        response: Response,
        file: &mut File,
        destination: &Path,
    ) -> Result<u64, ImageFetchError> {
        let io_error = |source| ImageFetchError::Io {
            path: destination.to_path_buf(),
            source,
        };

        let mut written = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| ImageFetchError::Network {
                url: url.to_string(),
                source,
            })?;

            for piece in chunk.chunks(self.chunk_size) {
                file.write_all(piece).await.map_err(io_error)?;
            }
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(io_error)?;
        Ok(written)
    }
}

async fn remove_partial(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => debug!("Removed partial file {:?}", path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove partial file {:?}: {}", path, e),
    }
}

/// Line printed to the user after an image download.
///
/// Failures always mention the URL the user typed in.
pub fn outcome_message(source_url: &str, result: &Result<PathBuf, ImageFetchError>) -> String {
    match result {
        Ok(path) => format!("Zapisano: {}", path.display()),
        Err(e) => format!("Błąd podczas pobierania {}: {}", source_url, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_clamps_chunk_size() {
        let settings = AppSettings {
            chunk_size: 0,
            ..Default::default()
        };
        let fetcher = ImageFetcher::new(&settings).expect("client");
        assert_eq!(fetcher.chunk_size, 1);
    }

    #[test]
    fn test_outcome_message_success() {
        let request = DownloadRequest::new("https://imgur.com/abc", Path::new("Photos")).unwrap();
        let result = Ok(request.destination_path.clone());
        let message = outcome_message(&request.source_url, &result);
        assert!(message.starts_with("Zapisano: "));
        assert!(message.contains("abc.png"));
    }

    #[test]
    fn test_outcome_message_failure_names_source_url() {
        let request = DownloadRequest::new("https://imgur.com/abc", Path::new("Photos")).unwrap();
        let result = Err(ImageFetchError::Status {
            url: request.resolved_url.clone(),
            status: reqwest::StatusCode::NOT_FOUND,
        });
        let message = outcome_message(&request.source_url, &result);
        assert!(message.contains("https://imgur.com/abc"));
        assert!(message.contains("https://i.imgur.com/abc.png"));
        assert!(message.contains("404"));
    }
}
