//! Utility modules for error handling, configuration and paths

pub mod config;
pub mod error;
pub mod paths;

// Re-export for convenience
pub use config::AppSettings;
pub use error::{ImageFetchError, ImageFetchErrorKind, SnapgrabError};
pub use paths::prepare_output_dir;
