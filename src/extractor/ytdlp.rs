//! yt-dlp wrapper for video downloads
//!
//! yt-dlp does the extraction, format negotiation and muxing. This module
//! only finds the binary, turns a [`VideoDownloadSpec`] into arguments and
//! runs it with the terminal attached.

use crate::extractor::traits::MediaEngine;
use crate::utils::error::SnapgrabError;
use crate::video::spec::VideoDownloadSpec;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Media engine backed by the yt-dlp executable
#[derive(Debug, Clone)]
pub struct YtDlp {
    ytdlp_path: PathBuf,
}

impl YtDlp {
    /// Locate yt-dlp on PATH or in a common install location
    pub fn new() -> Result<Self, SnapgrabError> {
        match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                Ok(Self { ytdlp_path: path })
            }
            None => {
                error!("yt-dlp not found anywhere!");
                Err(SnapgrabError::YtDlpNotFound)
            }
        }
    }

    /// Use a specific executable without searching
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ytdlp_path: path.into(),
        }
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }

    /// Command-line arguments for one download
    pub fn build_args(spec: &VideoDownloadSpec) -> Vec<OsString> {
        let playlist_flag = if spec.allow_playlist {
            "--yes-playlist"
        } else {
            "--no-playlist"
        };

        vec![
            OsString::from("-f"),
            OsString::from(&spec.format_selector),
            OsString::from(playlist_flag),
            OsString::from("-o"),
            spec.output_template().into_os_string(),
            // Anything after this is a URL, even if it starts with a dash.
            OsString::from("--"),
            OsString::from(&spec.source_url),
        ]
    }
}

#[async_trait]
impl MediaEngine for YtDlp {
    fn id(&self) -> &'static str {
        "yt-dlp"
    }

    async fn download(&self, spec: &VideoDownloadSpec) -> Result<(), SnapgrabError> {
        let args = Self::build_args(spec);
        debug!("Running {:?} {:?}", self.ytdlp_path, args);

        // Output is passed through untouched so the user sees yt-dlp's own
        // progress and error lines.
        let status = AsyncCommand::new(&self.ytdlp_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        if status.success() {
            info!("yt-dlp finished for {}", spec.source_url);
            Ok(())
        } else {
            warn!("yt-dlp failed for {} with {:?}", spec.source_url, status.code());
            Err(SnapgrabError::EngineFailed {
                code: status.code(),
            })
        }
    }
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find yt-dlp binary with priority:
/// 1. System PATH
/// 2. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        debug!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        debug!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found on PATH or in common locations");
    None
}

fn find_in_path() -> Option<PathBuf> {
    which::which("yt-dlp").ok().filter(|path| path.exists())
}

fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel) / manual installs
        "/usr/local/bin/yt-dlp",
        // Distribution packages
        "/usr/bin/yt-dlp",
        // pip --user / pipx
        "~/.local/bin/yt-dlp",
    ];

    common_paths
        .iter()
        .map(|path_str| expand_home(path_str))
        .find(|path| is_executable(path))
}

fn expand_home(path_str: &str) -> PathBuf {
    match path_str.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path_str)),
        None => PathBuf::from(path_str),
    }
}

/// Check if a file is executable
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, just check that the file exists
#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ============================================================
// Tests
// ============================================================
