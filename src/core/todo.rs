use serde::{Deserialize, Serialize};

use crate::parser::is_space;

/// One parsed TODO entry.
///
/// `title` is never empty and `priority` is always positive for records that
/// came out of the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: i64,
}

impl Todo {
    #[must_use]
    pub fn new(title: impl Into<String>, priority: i64, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description: description.as_deref().and_then(trim_description),
            priority,
        }
    }
}

/// Trim the whitespace around a description body.
///
/// A body that is empty after trimming is treated as absent.
#[must_use]
pub fn trim_description(body: &str) -> Option<String> {
    let trimmed = body.trim_matches(|c: char| u8::try_from(c).is_ok_and(is_space));
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
