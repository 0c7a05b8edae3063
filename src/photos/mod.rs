//! Image fetcher: Imgur link in, one file under the photos folder out

pub mod fetcher;
pub mod link;

pub use fetcher::{outcome_message, ImageFetcher};
pub use link::{resolve_image_url, DownloadRequest};
