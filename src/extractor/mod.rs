pub mod traits;
pub mod ytdlp;

pub use traits::MediaEngine;
pub use ytdlp::YtDlp;
