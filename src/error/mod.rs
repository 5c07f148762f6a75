// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitlint.
//!
//! Rule violations are not errors: they are collected into a
//! [`RunOutcome`](crate::rules::RunOutcome). The types here cover the
//! infrastructure failures that stop a run before any rule is evaluated.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitlint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors (the message source)
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintError {
    /// Whether this error means no commit message could be obtained.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, LintError::Git(_))
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Errors raised while retrieving the latest commit message.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Repository has no commits")]
    NoCommits,

    #[error("Commit {commit} has a message that is not valid UTF-8")]
    InvalidMessage { commit: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias for commitlint operations.
pub type Result<T> = std::result::Result<T, LintError>;
