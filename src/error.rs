//! Error types for todofile.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that can occur while working with a record file.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The record file is malformed.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    /// The record file does not exist.
    #[error("'{}' file or directory does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No record carries the requested title.
    #[error("TODO with title '{0}' not found")]
    NotFound(String),

    /// A record with this title already exists.
    #[error("TODO with title '{0}' already exists")]
    Duplicate(String),

    /// User input cannot be turned into a valid record.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or saved.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TodoError {
    /// The parse failure behind this error, if it is a syntax error.
    #[must_use]
    pub const fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Syntax(e) => Some(e),
            _ => None,
        }
    }
}
