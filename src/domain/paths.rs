//! # Plugin Paths
//!
//! Well-known file names and locations used when looking up configuration.

use std::path::PathBuf;

pub const PROJECTIONS_FILE: &str = ".projections.json";
pub const CONFIG_DIR: &str = "alternate";
pub const CONFIG_FILE: &str = "config.yaml";

/// Returns the per-user config path (e.g. "~/.config/alternate/config.yaml"), if the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
