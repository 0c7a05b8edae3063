//! Output directory setup

use std::path::Path;
use tracing::debug;

/// Make sure `dir` exists, creating parents as needed.
///
/// Safe to call repeatedly; an existing directory is left untouched.
pub async fn prepare_output_dir(dir: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    debug!("Output directory ready: {:?}", dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_prepare_output_dir_is_idempotent() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join("nested").join("Photos");

        prepare_output_dir(&dir).await.expect("first create");
        tokio::fs::write(dir.join("keep.png"), b"x").await.unwrap();
        prepare_output_dir(&dir).await.expect("second create");

        assert!(dir.is_dir());
        assert!(dir.join("keep.png").exists());
    }

    #[tokio::test]
    async fn test_prepare_output_dir_fails_on_file() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("edits");
        tokio::fs::write(&blocker, b"not a dir").await.unwrap();

        assert!(prepare_output_dir(&blocker).await.is_err());
    }
}
