//! Domain error types for bommap
//!
//! Provides structured error types for the two fallible edges of the
//! application: reading the imported part list and writing a submission.
//! The list/projection core itself is total and has no error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for bommap
#[derive(Debug, Error)]
pub enum BommapError {
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Submit error: {0}")]
    Submit(#[from] SubmitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors reading the imported part list file
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read part list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed row in {path}: {source}")]
    Row {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Errors writing a submission to the exports directory
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Failed to create exports directory {0}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write submission {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Result type alias for BommapError
pub type Result<T> = std::result::Result<T, BommapError>;
