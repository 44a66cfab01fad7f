//! Caret-annotated source diagnostics.
//!
//! A diagnostic reprints the offending line behind a `<line> | ` gutter and
//! draws a `^` under the failing byte:
//!
//! ```text
//! 2 | TODO:0 "x" {{}}
//!          ^
//! ```

use super::cursor::find_nth;

/// Where a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte column within that line.
    pub column: usize,
    /// Absolute byte offset into the source.
    pub offset: usize,
}

impl Diagnostic {
    /// Build a diagnostic for `offset`, which lies on `line`.
    #[must_use]
    pub fn locate(source: &str, offset: usize, line: usize) -> Self {
        let start = line_start(source, line);
        Self {
            line,
            column: offset.saturating_sub(start),
            offset,
        }
    }
}

/// Byte offset at which `line` begins.
fn line_start(source: &str, line: usize) -> usize {
    find_nth(source.as_bytes(), b'\n', line.saturating_sub(1)).map_or(0, |nl| nl + 1)
}

/// Render the gutter line and caret line for a failure at `offset` on `line`.
///
/// Columns are byte offsets, not grapheme offsets. The returned string ends
/// with a newline.
#[must_use]
pub fn report(source: &str, offset: usize, line: usize) -> String {
    let start = line_start(source, line).min(source.len());
    let text = source[start..].split('\n').next().unwrap_or_default();

    let gutter = format!("{line} | ");
    let column = offset.saturating_sub(start);

    format!(
        "{gutter}{text}\n{pad}^\n",
        pad = " ".repeat(gutter.len() + column)
    )
}
