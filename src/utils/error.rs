//! Error handling for snapgrab

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised on the video path.
///
/// The `tt` binary lets these propagate to the process boundary.
#[derive(Debug, Error)]
pub enum SnapgrabError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Invalid URL: {0:?}")]
    InvalidUrl(String),

    #[error("yt-dlp exited with {}", exit_label(.code))]
    EngineFailed { code: Option<i32> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Broad category of an image download failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFetchErrorKind {
    InvalidUrl,
    Status,
    Network,
    Io,
}

/// Tagged failure of a single image download.
///
/// Every variant names the URL or path it concerns, so the caller can
/// report it without extra context.
#[derive(Debug, Error)]
pub enum ImageFetchError {
    #[error("cannot derive a file name from {url}")]
    InvalidUrl { url: String },

    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImageFetchError {
    pub fn kind(&self) -> ImageFetchErrorKind {
        match self {
            ImageFetchError::InvalidUrl { .. } => ImageFetchErrorKind::InvalidUrl,
            ImageFetchError::Status { .. } => ImageFetchErrorKind::Status,
            ImageFetchError::Network { .. } => ImageFetchErrorKind::Network,
            ImageFetchError::Io { .. } => ImageFetchErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_failure_message() {
        let err = SnapgrabError::EngineFailed { code: Some(2) };
        assert_eq!(err.to_string(), "yt-dlp exited with status 2");

        let err = SnapgrabError::EngineFailed { code: None };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_image_error_kind_and_message() {
        let err = ImageFetchError::Status {
            url: "https://i.imgur.com/abc.png".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.kind(), ImageFetchErrorKind::Status);
        assert!(err.to_string().contains("https://i.imgur.com/abc.png"));
        assert!(err.to_string().contains("404"));

        let err = ImageFetchError::Io {
            path: PathBuf::from("Photos/abc.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), ImageFetchErrorKind::Io);
        assert!(err.to_string().contains("Photos/abc.png"));
    }
}
