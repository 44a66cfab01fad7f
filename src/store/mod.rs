//! Record file storage and mutation.
//!
//! Every mutation is a read-modify-write of the whole file. There is no
//! locking: concurrent writers race and the last rewrite wins.

mod file;
mod format;
mod splice;

use std::path::{Path, PathBuf};

use crate::core::Todo;
use crate::error::TodoError;
use crate::parser::parse;

pub use file::{read_whole_file, write_whole_file};
pub use format::{format_record, validate};
pub use splice::{locate_record, splice_out};

/// A record file on disk.
#[derive(Debug, Clone)]
pub struct TodoFile {
    path: PathBuf,
}

impl TodoFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every record in the file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// `TodoError::Syntax` if it does not parse.
    pub fn load(&self) -> Result<Vec<Todo>, TodoError> {
        let source = read_whole_file(&self.path)?;
        Ok(parse(&source)?)
    }

    /// Append a new record.
    ///
    /// The file is created if it does not exist yet. An existing file must
    /// parse cleanly and must not already hold a record with the same title.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` if the record cannot be written
    /// faithfully, `TodoError::Duplicate` if the title is taken, and
    /// syntax or I/O errors from reading and writing the file.
    pub fn add(&self, todo: &Todo) -> Result<(), TodoError> {
        validate(todo)?;

        let mut source = match read_whole_file(&self.path) {
            Ok(source) => source,
            Err(TodoError::FileNotFound(_)) => {
                tracing::info!(path = %self.path.display(), "creating record file");
                String::new()
            },
            Err(e) => return Err(e),
        };

        let existing = parse(&source)?;
        if existing.iter().any(|t| t.title == todo.title) {
            return Err(TodoError::Duplicate(todo.title.clone()));
        }

        if !source.is_empty() && !source.ends_with('\n') {
            source.push('\n');
        }
        source.push_str(&format_record(todo));

        write_whole_file(&self.path, &source)?;
        tracing::info!(title = %todo.title, priority = todo.priority, "added record");
        Ok(())
    }

    /// Remove the record titled `title` and return it.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if no record has that title, and
    /// syntax or I/O errors from reading and writing the file.
    pub fn remove(&self, title: &str) -> Result<Todo, TodoError> {
        let source = read_whole_file(&self.path)?;

        let record =
            locate_record(&source, title)?.ok_or_else(|| TodoError::NotFound(title.to_string()))?;
        let removed = record.todo;
        let rewritten = splice_out(&source, record.span);

        write_whole_file(&self.path, &rewritten)?;
        tracing::info!(title = %removed.title, "removed record");
        Ok(removed)
    }
}
