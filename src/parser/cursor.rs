//! Scanner primitives over a source buffer.
//!
//! All positions are byte offsets. The record grammar is ASCII-delimited, so
//! every position the scanner stops at lies on a `char` boundary.

/// Whitespace as the record format understands it: ASCII whitespace plus
/// vertical tab.
#[must_use]
pub const fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

/// Returns the byte index of the `n`-th occurrence of `needle` in `haystack`.
///
/// `n` is 1-based; `n == 0` and fewer than `n` occurrences both yield `None`.
#[must_use]
pub fn find_nth(haystack: &[u8], needle: u8, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }

    haystack
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == needle)
        .nth(n - 1)
        .map(|(i, _)| i)
}

/// A forward-only scan position plus its 1-based line number.
///
/// The line number always equals one plus the number of `\n` bytes
/// consumed so far.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    /// Current byte offset.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Current 1-based line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The byte under the cursor, if any.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Everything from the cursor to the end of input.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        self.src.get(self.pos..).unwrap_or_default()
    }

    /// Move forward `n` bytes, counting any newlines passed over.
    pub fn advance(&mut self, n: usize) {
        let end = (self.pos + n).min(self.src.len());
        self.line += self.src[self.pos..end].iter().filter(|&&b| b == b'\n').count();
        self.pos = end;
    }

    /// Skip a run of whitespace. Stops at the first non-space byte or at
    /// end of input.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if !is_space(b) {
                break;
            }
            if b == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Pure lookahead: does the input at the cursor begin with `literal`?
    #[must_use]
    pub fn starts_with(&self, literal: &str) -> bool {
        self.rest().starts_with(literal.as_bytes())
    }

    /// Length of the ASCII digit run at the cursor.
    ///
    /// Returns 0 when there are no digits, or when the digits run straight
    /// into an alphabetic byte (`12abc` is not a number). Whitespace, symbols
    /// and end of input are all acceptable terminators.
    #[must_use]
    pub fn match_number(&self) -> usize {
        let rest = self.rest();
        let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();

        match rest.get(len) {
            Some(b) if b.is_ascii_alphabetic() => 0,
            _ => len,
        }
    }

    /// Advance until `delimiter` is found, without consuming it.
    ///
    /// Returns the number of bytes scanned, or `None` if end of input was hit
    /// first. In the `None` case the cursor is left at end of input so that
    /// diagnostics point there.
    pub fn scan_until(&mut self, delimiter: &str) -> Option<usize> {
        let start = self.pos;
        while !self.is_eof() {
            if self.starts_with(delimiter) {
                return Some(self.pos - start);
            }
            self.advance(1);
        }
        None
    }
}
