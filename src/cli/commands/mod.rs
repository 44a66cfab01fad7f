//! Command implementations for todofile.
//!
//! Every command returns the text to print on success.

mod add;
mod completions;
mod config;

pub use add::add;
pub use completions::generate_completions;
pub use config::config;

use serde_json::json;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::core::{view, ViewOptions};
use crate::error::TodoError;
use crate::output::{format_todos, to_json};
use crate::store::TodoFile;

/// Resolve the view for `list` from configured defaults and flags.
#[must_use]
pub fn view_options(defaults: ViewOptions, args: &ListArgs) -> ViewOptions {
    ViewOptions {
        sort_by_priority: args.sort_by_priority.unwrap_or(defaults.sort_by_priority),
        sort_by_title: args.sort_by_title.unwrap_or(defaults.sort_by_title),
        level: match args.level {
            None => defaults.level,
            Some(0) => None,
            Some(level) => Some(i64::from(level)),
        },
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or output
/// formatting fails.
pub fn list(
    file: &TodoFile,
    options: &ViewOptions,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let todos = file.load()?;
    let shown = view::apply(&todos, options);
    format_todos(&shown, file.path(), format)
}

/// Execute remove command
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or written, or no
/// record has the given title.
pub fn remove(file: &TodoFile, title: &str, format: OutputFormat) -> Result<String, TodoError> {
    let removed = file.remove(title)?;

    match format {
        OutputFormat::Json => to_json(&json!({ "removed": removed })),
        OutputFormat::Pretty => Ok(format!("Removed TODO: {}", removed.title)),
    }
}

/// Execute check command
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn check(file: &TodoFile, format: OutputFormat) -> Result<String, TodoError> {
    let count = file.load()?.len();

    match format {
        OutputFormat::Json => to_json(&json!({
            "file": file.path().display().to_string(),
            "count": count,
            "ok": true
        })),
        OutputFormat::Pretty => {
            let noun = if count == 1 { "record" } else { "records" };
            Ok(format!("{}: {count} {noun} OK", file.path().display()))
        },
    }
}
