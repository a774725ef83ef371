//! # Configuration
//!
//! Manages the loading and parsing of the plugin's configuration file (`config.yaml`).
//! Every key is optional; a missing file means all defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::paths;
use crate::domain::types::Pane;

/// Main plugin configuration structure.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PluginConfig {
    /// File name searched for upward from the current file.
    #[serde(default = "default_projections_file")]
    pub projections_file: String,
    /// Pane used by the *InSplit commands.
    #[serde(default = "default_split")]
    pub split: Pane,
    #[serde(default = "default_true")]
    pub open_after_create: bool,
    /// Ask which candidate to create when the resolver suggests several; otherwise take the first.
    #[serde(default = "default_true")]
    pub prompt_on_multiple: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            projections_file: default_projections_file(),
            split: default_split(),
            open_after_create: true,
            prompt_on_multiple: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_projections_file() -> String {
    paths::PROJECTIONS_FILE.to_string()
}

fn default_split() -> Pane {
    Pane::Beside
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl PluginConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse plugin config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Load from `path` when given, else from the user config dir, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match paths::user_config_path() {
            Some(user_path) if user_path.exists() => Self::load(&user_path),
            _ => {
                tracing::debug!("No plugin config found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
