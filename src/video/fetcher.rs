//! Single-video download through a media engine

use crate::extractor::traits::MediaEngine;
use crate::utils::config::AppSettings;
use crate::utils::error::SnapgrabError;
use crate::utils::paths::prepare_output_dir;
use crate::video::spec::VideoDownloadSpec;
use std::sync::Arc;
use tracing::info;

/// Video fetcher
///
/// Engine failures are returned as-is; nothing is retried or masked.
pub struct VideoFetcher {
    engine: Arc<dyn MediaEngine>,
    settings: AppSettings,
}

impl VideoFetcher {
    pub fn new(engine: Arc<dyn MediaEngine>, settings: AppSettings) -> Self {
        Self { engine, settings }
    }

    /// Download `url` into the videos folder.
    ///
    /// Uses `custom_filename` as the base name when it is non-blank,
    /// otherwise the video title. Returns the spec that was executed.
    pub async fn download_tiktok_video(
        &self,
        url: &str,
        custom_filename: Option<&str>,
    ) -> Result<VideoDownloadSpec, SnapgrabError> {
        let spec = VideoDownloadSpec::new(url, custom_filename, &self.settings);
        if spec.source_url.is_empty() {
            return Err(SnapgrabError::InvalidUrl(url.to_string()));
        }

        prepare_output_dir(&spec.output_directory).await?;

        info!(
            "Downloading {} via {} into {:?}",
            spec.source_url,
            self.engine.id(),
            spec.output_template()
        );
        self.engine.download(&spec).await?;

        Ok(spec)
    }
}
