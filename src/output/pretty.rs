use colored::Colorize;

use crate::core::Todo;

const RULE: &str = "-----------------------";

/// Format records as the classic listing.
///
/// ```text
/// TODOs:
/// -----------------------
/// Title: Call mom
/// Priority: 1
/// Description:
///   urgent
/// -----------------------
/// ```
pub fn format_todos_pretty(todos: &[Todo]) -> String {
    let mut output = format!("{}\n", "TODOs:".bold());

    if todos.is_empty() {
        output.push_str("No TODOs.");
        return output;
    }

    for todo in todos {
        output.push_str(&format_todo_pretty(todo));
    }

    output.truncate(output.trim_end_matches('\n').len());
    output
}

/// Format one record as a ruled block, ending with a newline.
pub fn format_todo_pretty(todo: &Todo) -> String {
    let description = todo.description.as_ref().map_or_else(
        || "Not added.".dimmed().to_string(),
        |d| d.replace('\n', "\n  "),
    );

    format!(
        "{RULE}\n{}: {}\n{}: {}\n{}:\n  {description}\n{RULE}\n",
        "Title".dimmed(),
        todo.title.bold(),
        "Priority".dimmed(),
        todo.priority.to_string().yellow(),
        "Description".dimmed(),
    )
}
