//! Error types for single-role-delete
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::DirectoryError;

/// Result type alias for library operations
pub type RoleCleanerResult<T> = Result<T, RoleCleanerError>;

/// Main error type
#[derive(Error, Debug)]
pub enum RoleCleanerError {
    /// The user directory could not be queried
    #[error("user directory query failed: {0}")]
    Directory(#[from] DirectoryError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
