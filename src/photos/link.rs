//! Imgur link normalization and destination naming

use crate::utils::error::ImageFetchError;
use std::path::{Path, PathBuf};
use url::{ParseError, Url};

/// Hosts that already serve raw image bytes.
const DIRECT_IMAGE_PREFIXES: [&str; 2] = ["http://i.imgur.com", "https://i.imgur.com"];

/// Turn an Imgur page link into a direct image link.
///
/// `https://imgur.com/fZA6P5X` becomes `https://i.imgur.com/fZA6P5X.png`.
/// Anything else, including links already on `i.imgur.com`, is returned
/// verbatim. The rewrite always assumes `.png`; the real content type is
/// never checked.
pub fn resolve_image_url(input: &str) -> String {
    let is_page_link = input.contains("imgur.com")
        && !DIRECT_IMAGE_PREFIXES
            .iter()
            .any(|prefix| input.starts_with(prefix));

    if is_page_link {
        if let Some(id) = parse_lenient(input).and_then(|url| last_path_segment(&url)) {
            return format!("https://i.imgur.com/{}.png", id);
        }
    }

    input.to_string()
}

/// Parse `input`, reading a scheme-less `imgur.com/<id>` as https.
fn parse_lenient(input: &str) -> Option<Url> {
    match Url::parse(input) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", input)).ok()
        }
        Err(_) => None,
    }
}

/// Final non-empty path segment of `url`, as it will be requested.
///
/// Query and fragment are not part of the path. Returns `None` for bare
/// hosts and for the `.`/`..` pseudo-segments.
pub fn last_path_segment(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// One image download, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub source_url: String,
    pub resolved_url: String,
    pub destination_path: PathBuf,
}

impl DownloadRequest {
    /// Resolve `source_url` and place the file under `output_dir`.
    ///
    /// The resolved link must be an absolute URL with a file name in its path.
    pub fn new(source_url: &str, output_dir: &Path) -> Result<Self, ImageFetchError> {
        let source_url = source_url.trim();
        let resolved_url = resolve_image_url(source_url);

        let file_name = Url::parse(&resolved_url)
            .ok()
            .and_then(|url| last_path_segment(&url))
            .ok_or_else(|| ImageFetchError::InvalidUrl {
                url: source_url.to_string(),
            })?;
        let destination_path = output_dir.join(file_name);

        Ok(Self {
            source_url: source_url.to_string(),
            resolved_url,
            destination_path,
        })
    }

    /// Whether the source link was rewritten to a direct link
    pub fn was_rewritten(&self) -> bool {
        self.source_url != self.resolved_url
    }
}
