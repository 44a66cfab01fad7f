//! Serialization of records back into the file format.

use crate::core::Todo;
use crate::error::TodoError;
use crate::parser::{CLOSE_BLOCK, KEYWORD, OPEN_BLOCK};

/// Format one record exactly as the parser expects it, with a trailing
/// newline.
///
/// ```
/// use todofile::core::Todo;
/// use todofile::store::format_record;
///
/// let todo = Todo::new("Call mom", 1, Some("urgent".to_string()));
/// assert_eq!(format_record(&todo), "TODO:1 \"Call mom\" {{\nurgent\n}}\n");
/// ```
#[must_use]
pub fn format_record(todo: &Todo) -> String {
    match &todo.description {
        Some(description) => format!(
            "{KEYWORD}:{} \"{}\" {OPEN_BLOCK}\n{description}\n{CLOSE_BLOCK}\n",
            todo.priority, todo.title
        ),
        None => format!(
            "{KEYWORD}:{} \"{}\" {OPEN_BLOCK}{CLOSE_BLOCK}\n",
            todo.priority, todo.title
        ),
    }
}

/// Check that a record can be written without changing meaning on reparse.
///
/// # Errors
///
/// Returns `TodoError::InvalidInput` for an empty title, a title containing
/// `"`, a description containing `}}`, or a priority that is not positive.
pub fn validate(todo: &Todo) -> Result<(), TodoError> {
    if todo.title.is_empty() {
        return Err(TodoError::InvalidInput("title is empty".to_string()));
    }
    if todo.title.contains('"') {
        return Err(TodoError::InvalidInput(
            "title cannot contain '\"'".to_string(),
        ));
    }
    if todo
        .description
        .as_deref()
        .is_some_and(|d| d.contains(CLOSE_BLOCK))
    {
        return Err(TodoError::InvalidInput(format!(
            "description cannot contain '{CLOSE_BLOCK}'"
        )));
    }
    if todo.priority <= 0 {
        return Err(TodoError::InvalidInput(
            "priority must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
