//! # Local Files
//!
//! File creation on local disk, used as the default `EditorHost::create_file`.

use std::path::Path;
use tokio::fs::{self, OpenOptions};

use crate::domain::error::{Error, Result};

/// Create `path` (and its parent directories) if it does not exist yet.
/// An existing file is left untouched.
pub async fn create_file(path: &Path) -> Result<()> {
    let io_err = |cause| Error::Io {
        path: path.to_path_buf(),
        cause,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(io_err)?;

    tracing::debug!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tests/unit/widget_test.rs");

        create_file(&target).await.unwrap();

        assert!(target.is_file());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "");
    }

    #[tokio::test]
    async fn test_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("lib.rs");
        std::fs::write(&target, "fn main() {}\n").unwrap();

        create_file(&target).await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "fn main() {}\n");
    }

    #[tokio::test]
    async fn test_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let err = create_file(&blocker.join("child.rs")).await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
