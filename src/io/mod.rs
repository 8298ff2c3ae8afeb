//! Persistence, profile catalogs, rendering and the command line

/// Data-driven profiles loaded from JSON
pub mod catalog;
/// Command-line interface over snapshot files
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error type shared by the crate
pub mod error;
/// Text and image output
pub mod render;
/// Asynchronous profile lookup
pub mod resolver;
/// Capture and restore of grid contents
pub mod snapshot;
