use crate::utils::error::SnapgrabError;
use crate::video::spec::VideoDownloadSpec;
use async_trait::async_trait;

/// Seam between the video fetcher and whatever performs the download
///
/// The engine owns extraction, format negotiation, the network fetch and
/// muxing. It writes its own progress output; callers get no callback.
#[async_trait]
pub trait MediaEngine: Send + Sync {
    /// Returns a unique identifier for this engine (e.g., "yt-dlp")
    fn id(&self) -> &'static str;

    /// Download one video as described by `spec`
    async fn download(&self, spec: &VideoDownloadSpec) -> Result<(), SnapgrabError>;
}
