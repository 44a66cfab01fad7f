//! Add command implementation.

use serde_json::json;

use crate::cli::args::{AddArgs, OutputFormat};
use crate::core::{unescape, Todo};
use crate::error::TodoError;
use crate::output::to_json;
use crate::store::TodoFile;

/// Build the record described by `args`.
#[must_use]
pub fn todo_from_args(args: &AddArgs) -> Todo {
    let text = |s: &str| if args.raw { s.to_string() } else { unescape(s) };

    Todo::new(
        text(&args.title),
        args.priority,
        args.description.as_deref().map(text),
    )
}

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the record is invalid, its title is taken, or the
/// file cannot be parsed or written.
pub fn add(file: &TodoFile, args: &AddArgs, format: OutputFormat) -> Result<String, TodoError> {
    let todo = todo_from_args(args);
    file.add(&todo)?;

    match format {
        OutputFormat::Json => to_json(&json!({ "added": todo })),
        OutputFormat::Pretty => Ok(format!(
            "Added TODO: {} (priority {})",
            todo.title, todo.priority
        )),
    }
}
