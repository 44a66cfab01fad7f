//! Whole-file read and write.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::TodoError;

/// Read a record file into memory.
///
/// # Errors
///
/// Returns `TodoError::FileNotFound` if the file does not exist, and
/// `TodoError::Io` for any other read failure (including invalid UTF-8).
pub fn read_whole_file(path: &Path) -> Result<String, TodoError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            tracing::debug!(path = %path.display(), bytes = contents.len(), "read record file");
            Ok(contents)
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(TodoError::FileNotFound(path.to_path_buf()))
        },
        Err(e) => Err(TodoError::Io(e)),
    }
}

/// Replace the contents of a record file.
///
/// # Errors
///
/// Returns `TodoError::Io` if the file cannot be written.
pub fn write_whole_file(path: &Path, contents: &str) -> Result<(), TodoError> {
    std::fs::write(path, contents).map_err(TodoError::Io)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote record file");
    Ok(())
}
