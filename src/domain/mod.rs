//! # Domain Layer
//!
//! Core definitions, types, and traits of the plugin, including the outcome algebra every
//! fallible step is routed through. Serves as the contract for the other layers.

pub mod config;
pub mod error;
pub mod outcome;
pub mod paths;
pub mod traits;
pub mod types;
