//! # Command Router
//!
//! Routes an editor command id (e.g., `alternate.alternateFileInSplit`) to the matching flow
//! and reports the outcome: success is logged, failures are logged and surfaced in the editor.

use std::path::{Path, PathBuf};

use crate::application::commands::AlternateCommands;
use crate::domain::error::{Error, Result};
use crate::domain::outcome::{async_chain_ok, catch_panic, either};
use crate::domain::types::{Command, Pane};

pub struct CommandRouter {
    commands: AlternateCommands,
}

impl CommandRouter {
    pub fn new(commands: AlternateCommands) -> Self {
        Self { commands }
    }

    /// Dispatch `command_id` for the file currently shown in the editor.
    pub async fn route(&self, command_id: &str, current: &Path) -> Result<PathBuf> {
        tracing::info!(
            "Router dispatching cmd='{}' file='{}'",
            command_id,
            current.display()
        );

        let command =
            Command::from_str(command_id).ok_or_else(|| Error::UnknownCommand(command_id.into()));
        let result = async_chain_ok(|cmd| self.run(cmd, current))(command).await;

        self.report(command_id, &result).await;
        result
    }

    pub async fn run(&self, command: Command, current: &Path) -> Result<PathBuf> {
        let pane = if command.is_split() {
            self.commands.config().split
        } else {
            Pane::Current
        };

        if command.creates() {
            self.commands.create(current, pane).await
        } else {
            self.commands.open(current, pane).await
        }
    }

    async fn report(&self, command_id: &str, result: &Result<PathBuf>) {
        let message = either(
            |path: &PathBuf| {
                tracing::info!("{} -> {}", command_id, path.display());
                None
            },
            |err: &Error| {
                tracing::warn!("{} failed: {}", command_id, err);
                err.is_reportable().then(|| err.to_string())
            },
            result.as_ref(),
        );

        if let Some(message) = message
            && let Err(panicked) = catch_panic(self.commands.host().show_error(&message)).await
        {
            tracing::error!("Could not show error for {}: {}", command_id, panicked);
        }
    }
}
