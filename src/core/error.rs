//! Domain-specific error types for index generation.
//!
//! This module defines [`IndexError`], the single failure taxonomy of the
//! generator. Every scan, render or write failure is returned as one of its
//! variants; the binary decides how to report it and which exit status to use.
//!
//! # Public API
//! - [`IndexError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, IndexError>`
//!
//! # Error Categories
//! - **Directory scan**: Missing directory, permission denied, listing failures
//! - **Output**: Failure to write the rendered page
//! - **Configuration**: Invalid column count, unreadable or malformed config file

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Domain-specific error types for script-index
#[derive(Error, Debug)]
pub enum IndexError {
    // Directory scan errors
    #[error("Scripts directory does not exist: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory '{path}': {source}")]
    ReadDirFailed { path: PathBuf, source: io::Error },

    // Output errors
    #[error("Failed to write '{path}': {source}")]
    WriteFailed { path: PathBuf, source: io::Error },

    // Configuration errors
    #[error("Invalid column count: {count}. At least one column is required")]
    InvalidColumnCount { count: usize },

    #[error("Config file does not exist: {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using IndexError
pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    /// Classify a directory listing failure by its io::ErrorKind
    pub fn from_read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::DirectoryNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::ReadDirFailed { path, source },
        }
    }

    /// Create a write failed error
    pub fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid column count error
    pub fn invalid_column_count(count: usize) -> Self {
        Self::InvalidColumnCount { count }
    }

    pub fn config_file_not_found(path: &Path) -> Self {
        Self::ConfigFileNotFound {
            path: path.to_path_buf(),
        }
    }

    pub fn config_read_failed(path: &Path, source: io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config_parse_failed(path: &Path, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}
