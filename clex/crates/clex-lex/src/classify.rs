//! Character classification for dispatch.
//!
//! Pure predicates over a single character. Classification is ASCII-only:
//! a non-ASCII letter is not a letter here and reaches the engine's
//! unexpected-character path.

/// Characters that form single-character separators.
pub const SEPARATORS: [char; 9] = ['(', ')', '{', '}', '[', ']', ';', ',', '#'];

/// ASCII `A-Z` or `a-z`.
///
/// ```
/// use clex_lex::classify::is_letter;
///
/// assert!(is_letter('q'));
/// assert!(is_letter('Q'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('α'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII `0-9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ASCII letter or digit.
#[inline]
pub fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// First character of an identifier: a letter or underscore.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

/// Any later character of an identifier: letter, digit or underscore.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_letter_or_digit(c) || c == '_'
}

/// Whitespace skipped between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// One of the single-character separators.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}
