//! # Domain Traits
//!
//! Seams to the two collaborators the plugin does not own: the alternate-path resolver
//! and the editor hosting the plugin.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::types::{Pane, Projections};

/// Maps a file to its alternates under a projection ruleset.
pub trait AlternateResolver: Send + Sync {
    /// Candidate alternate paths for `path`, best first. May be empty.
    fn alternates(&self, path: &Path, projections: &Projections) -> Vec<PathBuf>;
}

/// Abstract interface for the editor (e.g., VS Code, a test double).
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Open `path` in the given pane
    async fn open_file(&self, path: &Path, pane: Pane) -> Result<(), String>;

    /// Ask the user to choose one of `candidates`. `None` means the prompt was dismissed.
    async fn pick(&self, prompt: &str, candidates: &[PathBuf]) -> Result<Option<PathBuf>, String>;

    /// Show an error notification to the user. Delivery is best effort.
    async fn show_error(&self, message: &str);

    /// Whether `path` exists. The default checks the local disk.
    async fn file_exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    /// Create an empty file, including missing parent directories.
    async fn create_file(&self, path: &Path) -> Result<(), String> {
        crate::infrastructure::fs::create_file(path)
            .await
            .map_err(|e| e.to_string())
    }
}
