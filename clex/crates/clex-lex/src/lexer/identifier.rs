//! Identifier and keyword lexing.

use crate::classify::is_ident_continue;
use crate::token::{is_keyword, TokenKind};
use crate::Lexer;

use super::Scanned;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a maximal run of letters, digits and underscores. The run is
    /// a keyword if it is in the reserved-word set, otherwise an identifier.
    pub(crate) fn scan_identifier(&mut self) -> Scanned {
        self.cursor.advance_while(is_ident_continue);

        let text = self.token_text();
        let kind = if is_keyword(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Scanned::ok(self.token(kind, text))
    }
}
