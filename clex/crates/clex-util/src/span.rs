//! Source locations.
//!
//! A [`Span`] pairs a byte range in the scanned buffer with the 1-based
//! line and column of its first character. Line and column are what users
//! see; the byte range is what snippet rendering slices with.

use std::fmt;

/// A region of the scanned buffer.
///
/// # Examples
///
/// ```
/// use clex_util::span::Span;
///
/// let span = Span::new(4, 7, 1, 5);
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.to_string(), "1:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Placeholder span for diagnostics that have no source location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {} is past end {}", start, end);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::span::Span;
    ///
    /// let point = Span::point(12, 2, 3);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this is the placeholder span.
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
