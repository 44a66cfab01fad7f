//! Locate a record's byte span in raw file text and cut it out.
//!
//! Removal works on the raw file text rather than re-serializing parsed
//! records, so every other byte of the file (comments in descriptions,
//! spacing, blank lines) survives untouched.

use std::ops::Range;

use crate::parser::{parse_spanned, ParseError, Spanned};

/// Find the record titled exactly `title` and the span to cut for it.
///
/// Spans come from the parser, so text inside another record's description
/// can never be mistaken for a record. The returned span covers the record
/// from its `TODO` keyword through the closing `}}`, plus one directly
/// following newline, if present.
///
/// # Errors
///
/// Returns the [`ParseError`] if `source` does not parse.
pub fn locate_record(source: &str, title: &str) -> Result<Option<Spanned>, ParseError> {
    let found = parse_spanned(source)?
        .into_iter()
        .find(|record| record.todo.title == title);

    Ok(found.map(|record| Spanned {
        span: with_trailing_newline(source, record.span),
        todo: record.todo,
    }))
}

/// Cut `span` out of `source`.
#[must_use]
pub fn splice_out(source: &str, span: Range<usize>) -> String {
    let mut out = String::with_capacity(source.len() - span.len());
    out.push_str(&source[..span.start]);
    out.push_str(&source[span.end..]);
    out
}

fn with_trailing_newline(source: &str, span: Range<usize>) -> Range<usize> {
    if source[span.end..].starts_with('\n') {
        span.start..span.end + 1
    } else {
        span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO: &str = "TODO:2 \"Buy milk\" {{}}\nTODO:1 \"Call mom\" {{\n  urgent\n}}\n";

    fn remove(source: &str, title: &str) -> Option<String> {
        locate_record(source, title)
            .unwrap()
            .map(|record| splice_out(source, record.span))
    }

    #[test]
    fn test_remove_first_record() {
        let out = remove(TWO, "Buy milk").unwrap();
        assert_eq!(out, "TODO:1 \"Call mom\" {{\n  urgent\n}}\n");
    }

    #[test]
    fn test_remove_last_record() {
        let out = remove(TWO, "Call mom").unwrap();
        assert_eq!(out, "TODO:2 \"Buy milk\" {{}}\n");
    }

    #[test]
    fn test_located_record_carries_parsed_fields() {
        let record = locate_record(TWO, "Call mom").unwrap().unwrap();
        assert_eq!(record.todo.priority, 1);
        assert_eq!(record.todo.description.as_deref(), Some("urgent"));
        assert_eq!(record.span, 23..TWO.len());
    }

    #[test]
    fn test_span_without_trailing_newline() {
        let source = "TODO:1 \"only\" {{ body }}";
        let record = locate_record(source, "only").unwrap().unwrap();
        assert_eq!(record.span, 0..source.len());
        assert_eq!(remove(source, "only").unwrap(), "");
    }

    #[test]
    fn test_span_keeps_surrounding_whitespace() {
        let source = "\n\nTODO:1 \"a\" {{}}\n\n  TODO:2 \"b\" {{}}\n";
        let out = remove(source, "b").unwrap();
        assert_eq!(out, "\n\nTODO:1 \"a\" {{}}\n\n  ");
    }

    #[test]
    fn test_prefix_of_longer_title_is_not_matched() {
        let source = "TODO:1 \"Buy milk today\" {{}}\nTODO:2 \"Buy milk\" {{}}\n";
        let out = remove(source, "Buy milk").unwrap();
        assert_eq!(out, "TODO:1 \"Buy milk today\" {{}}\n");
    }

    #[test]
    fn test_title_mentioned_in_description_is_skipped() {
        let source = "TODO:1 \"Plan\" {{\nsee Report\n}}\nTODO:2 \"Report\" {{}}\n";
        let out = remove(source, "Report").unwrap();
        assert_eq!(out, "TODO:1 \"Plan\" {{\nsee Report\n}}\n");
    }

    #[test]
    fn test_quoted_title_after_keyword_in_description_is_skipped() {
        let source = "TODO:1 \"Plan\" {{\nTODO: ask about \"Report\"\n}}\nTODO:2 \"Report\" {{}}\n";
        let out = remove(source, "Report").unwrap();
        assert_eq!(out, "TODO:1 \"Plan\" {{\nTODO: ask about \"Report\"\n}}\n");
    }

    #[test]
    fn test_title_containing_close_braces() {
        let source = "TODO:1 \"a}}b\" {{ x }}\nTODO:2 \"c\" {{}}\n";
        let out = remove(source, "a}}b").unwrap();
        assert_eq!(out, "TODO:2 \"c\" {{}}\n");
    }

    #[test]
    fn test_missing_title() {
        assert_eq!(remove(TWO, "Walk dog"), None);
        assert_eq!(remove(TWO, ""), None);
    }

    #[test]
    fn test_malformed_source_is_an_error() {
        assert!(locate_record("\"x\" {{}}", "x").is_err());
    }

    #[test]
    fn test_multibyte_text_before_match() {
        let source = "TODO:1 \"café\" {{ütf}}\nTODO:2 \"tea\" {{}}\n";
        let out = remove(source, "tea").unwrap();
        assert_eq!(out, "TODO:1 \"café\" {{ütf}}\n");
    }
}
