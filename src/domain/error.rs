//! # Plugin Errors
//!
//! Failures the command flows can end in. These travel as `Err` payloads through the
//! outcome combinators and are only turned into user-facing messages at the very end.

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot create {}: {cause}", .path.display())]
    Io { path: PathBuf, cause: io::Error },

    #[error("host call failed: {0}")]
    Host(String),

    #[error("invalid projections in {}: {cause}", .path.display())]
    InvalidProjections { path: PathBuf, cause: String },

    #[error("no alternate file for {} found", .path.display())]
    NoAlternate { path: PathBuf },

    #[error("no alternate file candidates for {}", .path.display())]
    NoCandidates { path: PathBuf },

    #[error("no projections file found above {}", .from.display())]
    NoProjections { from: PathBuf },

    #[error("selection cancelled")]
    Cancelled,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

impl Error {
    /// Whether the error should be reported back to the user.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Error::Cancelled)
    }
}

impl From<crate::domain::outcome::Panicked> for Error {
    fn from(panicked: crate::domain::outcome::Panicked) -> Self {
        Error::Host(panicked.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
