//! # alternate
//!
//! Editor plugin core for jumping between a file and its alternate (implementation and test,
//! header and source, ...) as described by a projections file:
//! - Domain: the outcome algebra, configuration, types, and host/resolver traits
//! - Infrastructure: projections lookup, local file creation
//! - Application: command flows, routing, logging
//!
//! The host editor supplies an [`EditorHost`] and the path-mapping [`AlternateResolver`];
//! everything else is wired up by [`Plugin::new`].

pub mod application;
pub mod domain;
pub mod infrastructure;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

pub use crate::application::commands::AlternateCommands;
pub use crate::application::router::CommandRouter;
pub use crate::domain::config::PluginConfig;
pub use crate::domain::error::Error;
pub use crate::domain::traits::{AlternateResolver, EditorHost};
pub use crate::domain::types::{Command, Pane};

/// A ready-to-use plugin instance.
pub struct Plugin {
    router: CommandRouter,
    _log_guard: Option<WorkerGuard>,
}

impl Plugin {
    /// Load configuration (explicit path, user config dir, or defaults), set up logging and
    /// wire the command router.
    pub fn new(
        config_path: Option<&Path>,
        resolver: Arc<dyn AlternateResolver>,
        host: Arc<dyn EditorHost>,
    ) -> Result<Self> {
        let config = PluginConfig::load_or_default(config_path)?;
        // The host may already own the global subscriber.
        let log_guard = match application::logging::init(&config.logging) {
            Ok(guard) => guard,
            Err(err) => {
                tracing::warn!("Keeping existing log subscriber: {:#}", err);
                None
            }
        };

        tracing::info!("Starting alternate plugin...");
        let commands = AlternateCommands::new(config, resolver, host);
        Ok(Self {
            router: CommandRouter::new(commands),
            _log_guard: log_guard,
        })
    }

    pub async fn execute(&self, command_id: &str, current: &Path) -> domain::error::Result<PathBuf> {
        self.router.route(command_id, current).await
    }

    pub fn router(&self) -> &CommandRouter {
        &self.router
    }
}
