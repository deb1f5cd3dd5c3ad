//! Typed error handling for texprune.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for texprune operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types.
#[derive(Error, Debug)]
pub enum TexpruneError {
    /// I/O error when reading, writing, or removing files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A root-relative image path without an extension separator
    #[error("Malformed image path (no extension separator): {path}")]
    MalformedPath { path: PathBuf },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl TexpruneError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-path error.
    pub fn malformed_path(path: impl Into<PathBuf>) -> Self {
        Self::MalformedPath { path: path.into() }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            Self::MalformedPath { path } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for texprune results.
pub type TexpruneResult<T> = Result<T, TexpruneError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> TexpruneResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> TexpruneResult<T> {
        self.map_err(|e| TexpruneError::io(path, e))
    }
}
