//! Parser for the plain-text TODO record format.
//!
//! # Grammar
//!
//! ```text
//! Document    := Record* WS
//! Record      := WS "TODO" WS ":" WS Priority WS '"' Title '"' WS "{{" Description "}}"
//! Priority    := digit+            (must be > 0)
//! Title       := [^"]+
//! Description := any text not containing "}}", trimmed, empty means absent
//! ```
//!
//! Parsing is fail-fast: the first malformed construct aborts the whole
//! document and no partial result is produced.

pub mod cursor;
pub mod diagnostic;

use std::ops::Range;

use thiserror::Error;

use crate::core::{trim_description, Todo};

pub use cursor::{find_nth, is_space, Cursor};
pub use diagnostic::{report, Diagnostic};

/// Record keyword.
pub const KEYWORD: &str = "TODO";
/// Opens a description block.
pub const OPEN_BLOCK: &str = "{{";
/// Closes a description block.
pub const CLOSE_BLOCK: &str = "}}";

/// Every way a document can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected 'TODO' statement")]
    ExpectedKeyword,
    #[error("expected ':'")]
    ExpectedColon,
    #[error("priority is invalid or not provided")]
    InvalidPriority,
    #[error("converting priority to number")]
    PriorityOverflow,
    #[error("trailing characters after priority: {0}")]
    TrailingCharacters(String),
    #[error("priority is less or equal to 0")]
    NonPositivePriority,
    #[error("expected starting '\"'")]
    ExpectedStartingQuote,
    #[error("title is empty")]
    EmptyTitle,
    #[error("expected ending '\"'")]
    ExpectedEndingQuote,
    #[error("expected '{{{{'")]
    ExpectedOpenBlock,
    #[error("expected ending '}}}}'")]
    ExpectedCloseBlock,
}

/// A fatal parse failure with the position it happened at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (line {}, column {})", .diagnostic.line, .diagnostic.column + 1)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub diagnostic: Diagnostic,
    snippet: String,
}

impl ParseError {
    fn at(source: &str, cursor: &Cursor<'_>, kind: ParseErrorKind) -> Self {
        Self {
            kind,
            diagnostic: Diagnostic::locate(source, cursor.pos(), cursor.line()),
            snippet: report(source, cursor.pos(), cursor.line()),
        }
    }

    /// The gutter and caret lines pointing at the failure.
    #[must_use]
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Full human-readable report: snippet followed by the message line.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}Error: {}.", self.snippet, self.kind)
    }
}

/// A parsed record together with the byte range it occupies.
///
/// `span` starts at the `TODO` keyword and ends just past the closing `}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub todo: Todo,
    pub span: Range<usize>,
}

/// Parse a whole document into records, in file order.
///
/// An empty or whitespace-only document yields an empty list.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; nothing after it is parsed.
pub fn parse(source: &str) -> Result<Vec<Todo>, ParseError> {
    Ok(parse_spanned(source)?.into_iter().map(|r| r.todo).collect())
}

/// Like [`parse`], but keeps the byte span of every record.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_spanned(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut cursor = Cursor::new(source);
    let mut records = Vec::new();

    loop {
        cursor.skip_whitespace();
        if cursor.is_eof() {
            break;
        }
        let start = cursor.pos();
        let todo = parse_record(source, &mut cursor)?;
        records.push(Spanned {
            todo,
            span: start..cursor.pos(),
        });
    }

    tracing::debug!(records = records.len(), bytes = source.len(), "parsed document");
    Ok(records)
}

fn parse_record(source: &str, cursor: &mut Cursor<'_>) -> Result<Todo, ParseError> {
    if !cursor.starts_with(KEYWORD) {
        return Err(ParseError::at(source, cursor, ParseErrorKind::ExpectedKeyword));
    }
    cursor.advance(KEYWORD.len());

    cursor.skip_whitespace();
    if cursor.peek() != Some(b':') {
        return Err(ParseError::at(source, cursor, ParseErrorKind::ExpectedColon));
    }
    cursor.advance(1);

    cursor.skip_whitespace();
    let priority = parse_priority(source, cursor)?;

    cursor.skip_whitespace();
    if cursor.peek() != Some(b'"') {
        return Err(ParseError::at(source, cursor, ParseErrorKind::ExpectedStartingQuote));
    }
    cursor.advance(1);

    let title_start = cursor.pos();
    let scanned = cursor.scan_until("\"");
    if cursor.pos() == title_start {
        return Err(ParseError::at(source, cursor, ParseErrorKind::EmptyTitle));
    }
    if scanned.is_none() {
        return Err(ParseError::at(source, cursor, ParseErrorKind::ExpectedEndingQuote));
    }
    let title = source[title_start..cursor.pos()].to_string();
    cursor.advance(1);

    cursor.skip_whitespace();
    if !cursor.starts_with(OPEN_BLOCK) {
        return Err(ParseError::at(source, cursor, ParseErrorKind::ExpectedOpenBlock));
    }
    cursor.advance(OPEN_BLOCK.len());

    let body_start = cursor.pos();
    if cursor.scan_until(CLOSE_BLOCK).is_none() {
        return Err(ParseError::at(source, cursor, ParseErrorKind::ExpectedCloseBlock));
    }
    let description = trim_description(&source[body_start..cursor.pos()]);
    cursor.advance(CLOSE_BLOCK.len());

    Ok(Todo {
        title,
        description,
        priority,
    })
}

/// Parse the priority digits at the cursor. Errors point at the first digit.
fn parse_priority(source: &str, cursor: &mut Cursor<'_>) -> Result<i64, ParseError> {
    let len = cursor.match_number();
    if len == 0 {
        return Err(ParseError::at(source, cursor, ParseErrorKind::InvalidPriority));
    }

    let start = cursor.pos();
    let digits = &source[start..start + len];

    let priority: i64 = digits
        .parse()
        .map_err(|_| ParseError::at(source, cursor, ParseErrorKind::PriorityOverflow))?;

    let trailing = source[start + len..]
        .split(|c: char| c == '"' || u8::try_from(c).is_ok_and(is_space))
        .next()
        .unwrap_or_default();
    if !trailing.is_empty() {
        let kind = ParseErrorKind::TrailingCharacters(trailing.to_string());
        return Err(ParseError::at(source, cursor, kind));
    }

    if priority <= 0 {
        return Err(ParseError::at(
            source,
            cursor,
            ParseErrorKind::NonPositivePriority,
        ));
    }

    cursor.advance(len);
    Ok(priority)
}
