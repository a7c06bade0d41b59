//! Error types for tree rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or walking a tree.
#[derive(Error, Debug)]
pub enum GroveError {
    #[error("Permission denied: {0}")]
    AccessDenied(PathBuf),

    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GroveError {
    /// Classify an IO failure for `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => GroveError::AccessDenied(path),
            std::io::ErrorKind::NotFound => GroveError::NotFound(path),
            _ => GroveError::Io { path, source },
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GroveError>;
