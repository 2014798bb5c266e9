// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// area-labeler error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required environment is missing
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Rule file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The changed-file listing could not be produced.
    #[error("failed to run '{command}': {message}")]
    Git { command: String, message: String },

    /// GitHub API request failed.
    #[error("remote error: {0}")]
    Remote(String),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using area-labeler Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Labels printed (and applied, or deliberately not applied)
    Success = 0,
    /// Precondition, argument, git, or remote failure
    Failure = 1,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Precondition(_)
            | Error::Argument(_)
            | Error::Config { .. }
            | Error::Io { .. }
            | Error::Git { .. }
            | Error::Remote(_) => ExitCode::Failure,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
