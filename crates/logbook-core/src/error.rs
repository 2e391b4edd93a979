//! Error types for logbook

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;

/// Main error type for logbook operations
#[derive(Debug, Error)]
pub enum LogbookError {
    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable is not on PATH
    #[error("git executable not found on PATH")]
    GitNotFound,

    /// A revision git does not know about
    #[error("unknown revision: {0}")]
    UnknownRevision(String),

    /// A git invocation exited non-zero
    #[error("{command} failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Git produced output that is not valid UTF-8
    #[error("git produced non-UTF-8 output")]
    InvalidOutput(#[from] std::string::FromUtf8Error),

    /// Failed to spawn git
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// Failed to write changelog
    #[error("Failed to write changelog: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogbookError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
