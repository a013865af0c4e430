//! String literal lexing.
//!
//! This module handles string literals and their escape sequences.

use clex_util::DiagnosticCode;

use crate::token::TokenKind;
use crate::Lexer;

use super::Scanned;

/// Escape letters and the characters they decode to. Any other character
/// after a backslash is copied through unchanged.
const ESCAPES: [(char, char); 5] = [
    ('n', '\n'),
    ('t', '\t'),
    ('r', '\r'),
    ('\\', '\\'),
    ('"', '"'),
];

/// Decodes the character following a backslash.
fn decode_escape(c: char) -> char {
    ESCAPES
        .iter()
        .find(|(escape, _)| *escape == c)
        .map_or(c, |(_, decoded)| *decoded)
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// The lexeme is the decoded content without the quotes. A literal cut
    /// short by a newline or the end of input is an error token carrying the
    /// content read so far; the newline itself is left in place.
    pub(crate) fn scan_string(&mut self) -> Scanned {
        self.cursor.advance();

        let mut content = String::new();

        while !self.cursor.is_at_end() {
            match self.cursor.peek() {
                '\n' => break,
                '"' => {
                    self.cursor.advance();
                    return Scanned::ok(self.token(TokenKind::StringLiteral, content));
                },
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        break;
                    }
                    content.push(decode_escape(self.cursor.advance()));
                },
                _ => content.push(self.cursor.advance()),
            }
        }

        let message = format!("unterminated string literal starting {}", self.location());
        let diagnostic = self
            .error_builder(DiagnosticCode::E_LEXER_UNTERMINATED_STRING, message)
            .help("add a closing `\"`")
            .build();
        Scanned::error(self.token(TokenKind::Error, content), diagnostic)
    }
}
