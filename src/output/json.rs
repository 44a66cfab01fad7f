//! JSON output formatting for todofile.

use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::core::Todo;
use crate::error::TodoError;

/// Format records as JSON
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_todos_json(todos: &[Todo], file: &Path) -> Result<String, TodoError> {
    let output = json!({
        "file": file.display().to_string(),
        "count": todos.len(),
        "items": todos
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
