//! snapgrab library
//!
//! Two single-shot downloaders: `photos` saves one image from an Imgur link
//! over HTTP, `tt` hands one video URL to yt-dlp.

pub mod cli;
pub mod extractor;
pub mod photos;
pub mod utils;
pub mod video;

// Re-export main types for easier use
pub use extractor::{MediaEngine, YtDlp};
pub use photos::{DownloadRequest, ImageFetcher};
pub use utils::{AppSettings, ImageFetchError, SnapgrabError};
pub use video::{VideoDownloadSpec, VideoFetcher};
