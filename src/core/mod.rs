//! Core record types and the operations shared by every command.
//!
//! This module provides the in-memory record model, the view layer that
//! sorts and filters parsed records, and unescaping for user input.

mod escape;
mod todo;
pub mod view;

pub use escape::unescape;
pub use todo::{trim_description, Todo};
pub use view::ViewOptions;
