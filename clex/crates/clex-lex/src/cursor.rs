//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// Value returned by [`Cursor::peek`] and [`Cursor::peek_ahead`] past the end
/// of the buffer.
///
/// A literal NUL inside the buffer reads the same way, so callers that need
/// to tell the two apart check [`Cursor::is_at_end`].
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// The position is a byte offset; the column counts characters, so a
/// multi-byte character still advances the column by one.
///
/// # Example
///
/// ```
/// use clex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.peek(), 'i');
/// assert_eq!(cursor.advance(), 'i');
/// assert_eq!(cursor.peek(), 'n');
/// assert_eq!(cursor.peek_ahead(1), 't');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn peek(&self) -> char {
        self.peek_ahead(0)
    }

    /// Returns the character `offset` characters past the current one.
    ///
    /// ```
    /// use clex_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_ahead(0), 'a');
    /// assert_eq!(cursor.peek_ahead(1), 'b');
    /// assert_eq!(cursor.peek_ahead(2), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek_ahead(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path: an all-ASCII window can be indexed by byte
        if let Some(bytes) = rest.as_bytes().get(..=offset) {
            if bytes.is_ascii() {
                return bytes[offset] as char;
            }
        }

        rest.chars().nth(offset).unwrap_or(EOF_CHAR)
    }

    /// Consumes the current character and returns it.
    ///
    /// A newline moves to column 1 of the next line; any other character
    /// moves one column right. At the end of the buffer nothing moves and
    /// [`EOF_CHAR`] is returned.
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return EOF_CHAR;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Advances the cursor by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.peek()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
