//! Application configuration

use std::path::PathBuf;
use std::time::Duration;

/// Browser identification sent with every image request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default yt-dlp format selector: best video + best audio muxed, else best single stream.
pub const DEFAULT_FORMAT_SELECTOR: &str = "bestvideo+bestaudio/best";

/// Application settings
///
/// Built once by each binary and passed by reference into every call.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Folder receiving downloaded images
    pub photos_dir: PathBuf,

    /// Folder receiving downloaded videos
    pub videos_dir: PathBuf,

    /// Maximum number of bytes written per write call
    pub chunk_size: usize,

    /// Pause after a finished image download
    pub request_delay: Duration,

    /// Whole-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,

    /// yt-dlp `-f` argument
    pub format_selector: String,

    /// Fetch the whole playlist when the URL points into one
    pub allow_playlist: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            photos_dir: PathBuf::from("Photos"),
            videos_dir: PathBuf::from("edits"),
            chunk_size: 1024,
            request_delay: Duration::from_secs(1),
            request_timeout: None,
            format_selector: DEFAULT_FORMAT_SELECTOR.to_string(),
            allow_playlist: false,
        }
    }
}
