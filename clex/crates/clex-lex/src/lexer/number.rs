//! Number literal lexing.
//!
//! A number is a digit run with at most one fractional part and, when
//! exponents are enabled, one exponent. Letters glued to a number make the
//! whole run an invalid identifier.

use clex_util::DiagnosticCode;

use crate::classify::{is_digit, is_ident_continue, is_ident_start};
use crate::token::TokenKind;
use crate::Lexer;

use super::Scanned;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    pub(crate) fn scan_number(&mut self) -> Scanned {
        self.cursor.advance_while(is_digit);

        if self.cursor.peek() == '.' {
            self.cursor.advance();
            self.cursor.advance_while(is_digit);

            // A second dot is left for the next token
            if self.cursor.peek() == '.' {
                return self.malformed_number();
            }
        }

        if self.config.exponents && self.at_exponent() {
            self.cursor.advance();
            if matches!(self.cursor.peek(), '+' | '-') {
                self.cursor.advance();
            }
            self.cursor.advance_while(is_digit);
        }

        if is_ident_start(self.cursor.peek()) {
            return self.invalid_identifier();
        }

        Scanned::ok(self.token(TokenKind::Number, self.token_text()))
    }

    /// Returns true if an exponent starts at the cursor: `e` or `E`, an
    /// optional sign, then at least one digit.
    fn at_exponent(&self) -> bool {
        if !matches!(self.cursor.peek(), 'e' | 'E') {
            return false;
        }
        match self.cursor.peek_ahead(1) {
            '+' | '-' => is_digit(self.cursor.peek_ahead(2)),
            c => is_digit(c),
        }
    }

    fn malformed_number(&mut self) -> Scanned {
        let text = self.token_text();
        let message = format!("malformed number '{}' {}", text, self.location());
        let diagnostic = self
            .error_builder(DiagnosticCode::E_LEXER_MALFORMED_NUMBER, message)
            .note("a number literal has at most one decimal point")
            .build();
        Scanned::error(self.token(TokenKind::Error, text), diagnostic)
    }

    fn invalid_identifier(&mut self) -> Scanned {
        self.cursor.advance_while(is_ident_continue);

        let text = self.token_text();
        let message = format!(
            "identifier cannot start with a digit: '{}' {}",
            text,
            self.location()
        );
        let diagnostic = self
            .error_builder(DiagnosticCode::E_LEXER_INVALID_IDENTIFIER, message)
            .help("identifiers start with a letter or underscore")
            .build();
        Scanned::error(self.token(TokenKind::Error, text), diagnostic)
    }
}
