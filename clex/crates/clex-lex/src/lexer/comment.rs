//! Trivia skipping.
//!
//! This module handles skipping whitespace, line comments and block comments.

use clex_util::{Diagnostic, DiagnosticCode};

use crate::classify::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments before the next token.
    ///
    /// Returns the unterminated-comment diagnostic when a block comment runs
    /// to the end of input. The cursor is then at the end, so the engine
    /// goes on to produce the end-of-stream token.
    pub(crate) fn skip_trivia(&mut self) -> Option<Diagnostic> {
        loop {
            if self.cursor.is_at_end() {
                return None;
            }

            match (self.cursor.peek(), self.cursor.peek_ahead(1)) {
                (c, _) if is_whitespace(c) => {
                    self.cursor.advance();
                },
                ('/', '/') => self.skip_line_comment(),
                ('/', '*') => {
                    if let Some(diagnostic) = self.skip_block_comment() {
                        return Some(diagnostic);
                    }
                },
                _ => return None,
            }
        }
    }

    /// Skips a `//` comment up to, not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        self.cursor.advance_while(|c| c != '\n');
    }

    /// Skips a `/* */` comment. Block comments do not nest.
    fn skip_block_comment(&mut self) -> Option<Diagnostic> {
        self.mark_token_start();
        self.cursor.advance_n(2);

        while !self.cursor.is_at_end() {
            if self.cursor.peek() == '*' && self.cursor.peek_ahead(1) == '/' {
                self.cursor.advance_n(2);
                return None;
            }
            self.cursor.advance();
        }

        let message = format!("unterminated comment starting {}", self.location());
        Some(
            self.error_builder(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT, message)
                .help("close the comment with `*/`")
                .build(),
        )
    }
}
