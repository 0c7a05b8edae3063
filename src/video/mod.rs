//! Video fetcher: one URL in, one muxed file under the videos folder out

pub mod fetcher;
pub mod spec;

pub use fetcher::VideoFetcher;
pub use spec::VideoDownloadSpec;
