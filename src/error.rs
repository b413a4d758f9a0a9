//! Error types for lint-docs operations.
//!
//! This module defines [`LintDocsError`], the error type for failures that
//! stop a run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems inside documents are never errors; they become findings
//! - A file that cannot be read becomes a `read-failure` finding
//! - Only configuration failures (bad root, bad config file) are returned as `Err`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lint-docs operations.
#[derive(Debug, Error)]
pub enum LintDocsError {
    /// The corpus root does not exist.
    #[error("Root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// The corpus root exists but is not a directory.
    #[error("Root is not a directory: {path}")]
    RootNotADirectory { path: PathBuf },

    /// The corpus root exists but cannot be listed.
    #[error("Cannot read root directory {path}: {message}")]
    RootUnreadable { path: PathBuf, message: String },

    /// An explicitly requested config file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintDocsError {
    /// Whether this error means the run could not even enumerate the corpus.
    pub fn is_configuration_failure(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound { .. }
                | Self::RootNotADirectory { .. }
                | Self::RootUnreadable { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
        )
    }
}

/// Result type alias for lint-docs operations.
pub type Result<T> = std::result::Result<T, LintDocsError>;
