//! # Domain Types
//!
//! Common data structures and enums used across the command flows.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where the host should show a file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    #[default]
    Current,
    Beside,
    Below,
}

/// The plugin's editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    OpenInSplit,
    Create,
    CreateInSplit,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Open,
        Command::OpenInSplit,
        Command::Create,
        Command::CreateInSplit,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "alternate.alternateFile" => Some(Command::Open),
            "alternate.alternateFileInSplit" => Some(Command::OpenInSplit),
            "alternate.createAlternateFile" => Some(Command::Create),
            "alternate.createAlternateFileInSplit" => Some(Command::CreateInSplit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Open => "alternate.alternateFile",
            Command::OpenInSplit => "alternate.alternateFileInSplit",
            Command::Create => "alternate.createAlternateFile",
            Command::CreateInSplit => "alternate.createAlternateFileInSplit",
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Command::OpenInSplit | Command::CreateInSplit)
    }

    pub fn creates(&self) -> bool {
        matches!(self, Command::Create | Command::CreateInSplit)
    }
}

/// A resolver suggestion, annotated with whether it is already on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub exists: bool,
}

/// One or several alternate patterns for a projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Alternates {
    One(String),
    Many(Vec<String>),
}

impl Alternates {
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Alternates::One(pattern) => vec![pattern.as_str()],
            Alternates::Many(patterns) => patterns.iter().map(String::as_str).collect(),
        }
    }
}

/// A single projection rule. Keys other than `alternate` are kept for the resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Projection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Alternates>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A parsed projections file together with the directory its patterns are relative to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projections {
    pub root: PathBuf,
    pub rules: BTreeMap<String, Projection>,
}
