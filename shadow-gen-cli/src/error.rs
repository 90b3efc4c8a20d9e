//! Error types for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error loading schema documents.
    #[error("Failed to load schemas: {0}")]
    Load(#[from] LoadError),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Generation pass finished with per-class errors.
    #[error("Generation finished with {0} error(s)")]
    Generation(usize),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during schema document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Schema path does not exist.
    #[error("Schema path not found: {path}")]
    NotFound { path: PathBuf },

    /// No schema documents under the given directory.
    #[error("No .json schema documents found in: {path}")]
    NoDocuments { path: PathBuf },

    /// Malformed schema document.
    #[error("Invalid schema document {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    /// IO error while reading a document.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Create an invalid-document error.
    pub fn invalid_document(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Error loading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed TOML in the configuration file.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// Configuration file already exists (init without --force).
    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// IO error reading or writing the configuration file.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create an invalid-TOML error.
    pub fn invalid_toml(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path: path.into(),
            message: message.into(),
        }
    }
}
