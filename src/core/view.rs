//! Sorting and filtering of parsed records for display.

use serde::{Deserialize, Serialize};

use super::Todo;

/// How a list of records is presented.
///
/// Replaces the process-wide filter flags of a typical shell tool with an
/// explicit value handed to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Sort ascending by priority.
    pub sort_by_priority: bool,
    /// Sort by title, case-insensitively.
    pub sort_by_title: bool,
    /// Show only records with exactly this priority.
    pub level: Option<i64>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            sort_by_priority: true,
            sort_by_title: false,
            level: None,
        }
    }
}

impl ViewOptions {
    /// Does `todo` pass the level filter?
    #[must_use]
    pub fn includes(&self, todo: &Todo) -> bool {
        self.level.map_or(true, |level| todo.priority == level)
    }
}

/// Produce the records to display, in display order.
///
/// Title sort runs first and priority sort second; both are stable, so when
/// both are enabled priority decides and title order breaks ties.
#[must_use]
pub fn apply(todos: &[Todo], options: &ViewOptions) -> Vec<Todo> {
    let mut view: Vec<Todo> = todos
        .iter()
        .filter(|todo| options.includes(todo))
        .cloned()
        .collect();

    if options.sort_by_title {
        view.sort_by_cached_key(|todo| todo.title.to_lowercase());
    }
    if options.sort_by_priority {
        view.sort_by_key(|todo| todo.priority);
    }

    view
}
