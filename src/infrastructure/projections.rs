//! # Projections Loader
//!
//! Locates the nearest projections file above a source file and parses it into
//! the ruleset handed to the resolver.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::error::{Error, Result};
use crate::domain::outcome::async_chain_ok;
use crate::domain::types::{Projection, Projections};

/// Walk from `from` (or its directory, if it is a file) up to the root and return the
/// first `file_name` found.
pub async fn find(from: &Path, file_name: &str) -> Result<PathBuf> {
    let is_dir = fs::metadata(from)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    let start = if is_dir { Some(from) } else { from.parent() };

    for dir in start.into_iter().flat_map(Path::ancestors) {
        let candidate = dir.join(file_name);
        if fs::try_exists(&candidate).await.unwrap_or(false) {
            tracing::debug!("Using projections from {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(Error::NoProjections {
        from: from.to_path_buf(),
    })
}

/// Parse a projections file. Patterns are relative to the file's directory.
pub async fn load(path: PathBuf) -> Result<Projections> {
    let invalid = |cause: String| Error::InvalidProjections {
        path: path.clone(),
        cause,
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| invalid(e.to_string()))?;
    let rules: BTreeMap<String, Projection> =
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;

    let root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(Projections { root, rules })
}

/// `find` followed by `load`.
pub async fn find_and_load(from: &Path, file_name: &str) -> Result<Projections> {
    async_chain_ok(load)(find(from, file_name).await).await
}
