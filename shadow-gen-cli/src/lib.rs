//! # shadow-gen-cli
//!
//! CLI library for the shadow companion generator.
//!
//! This crate provides the host-side plumbing around `shadow-gen`: schema
//! document loading, configuration, and filesystem output.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`loader`] - Schema document discovery and loading
//! - [`writer`] - Filesystem artifact sink with dry-run support
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod loader;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use loader::SchemaLoader;
pub use writer::DirectorySink;
