//! # Infrastructure Layer
//!
//! Handles interactions with the local filesystem: projection file discovery and file creation.

pub mod fs;
pub mod projections;
