//! Output formatting for todofile.
//!
//! This module provides formatters for displaying records in various formats.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::core::Todo;
use crate::error::TodoError;

pub use json::*;
pub use pretty::*;

/// Format records based on output format
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_todos(todos: &[Todo], file: &Path, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_todos_pretty(todos)),
        OutputFormat::Json => format_todos_json(todos, file),
    }
}
