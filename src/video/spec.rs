//! Download task handed to the media engine

use crate::utils::config::AppSettings;
use std::path::PathBuf;

/// yt-dlp field that expands to the video title.
pub const TITLE_FIELD: &str = "%(title)s";

/// yt-dlp field that expands to the negotiated container extension.
pub const EXT_FIELD: &str = "%(ext)s";

/// Everything the engine needs for one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDownloadSpec {
    pub source_url: String,
    pub output_directory: PathBuf,
    /// Base name without extension: a literal custom name or [`TITLE_FIELD`]
    pub filename_template: String,
    pub format_selector: String,
    pub allow_playlist: bool,
}

impl VideoDownloadSpec {
    /// Build a spec for `url`.
    ///
    /// A `custom_filename` that is empty after trimming falls back to the
    /// video title.
    pub fn new(url: &str, custom_filename: Option<&str>, settings: &AppSettings) -> Self {
        let filename_template = custom_filename
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(escape_template_literal)
            .unwrap_or_else(|| TITLE_FIELD.to_string());

        Self {
            source_url: url.trim().to_string(),
            output_directory: settings.videos_dir.clone(),
            filename_template,
            format_selector: settings.format_selector.clone(),
            allow_playlist: settings.allow_playlist,
        }
    }

    /// True when the name comes from the video metadata
    pub fn uses_title(&self) -> bool {
        self.filename_template == TITLE_FIELD
    }

    /// Full `-o` value: `<dir>/<base>.%(ext)s`
    pub fn output_template(&self) -> PathBuf {
        self.output_directory
            .join(format!("{}.{}", self.filename_template, EXT_FIELD))
    }
}

/// `%` starts a field in yt-dlp templates, so a literal one is doubled.
fn escape_template_literal(name: &str) -> String {
    name.replace('%', "%%")
}
