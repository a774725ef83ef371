//! # Application Layer
//!
//! Orchestration of the plugin: the alternate-file command flows, command routing,
//! and logging setup.

pub mod commands;
pub mod logging;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;
