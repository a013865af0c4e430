//! clex-lex - Lexical Scanner for C-family Source Text
//!
//! This crate converts raw source text of a C-family language subset into an
//! ordered sequence of classified tokens, each tagged with the line and
//! column of its first character, while collecting diagnostics for malformed
//! input. It performs no grammar-level analysis.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::{tokenize, LexerConfig, Lexer, TokenKind};
//!
//! let stream = tokenize("while (i <<= 2) { s = \"a\\tb\"; }", &LexerConfig::default()).unwrap();
//! assert!(stream.diagnostics().is_empty());
//! assert_eq!(stream.tokens()[0].kind(), TokenKind::Keyword);
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new("x @ y");
//! for token in &mut lexer {
//!     println!("{}", token);
//! }
//! assert_eq!(lexer.diagnostics().len(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the reserved-word set
//! - [`lexer`] - The scanning engine and its lexeme scanners
//! - [`cursor`] - Character cursor with line/column tracking
//! - [`classify`] - Character class predicates
//! - [`config`] - Scanner configuration and the operator table
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! - **Keywords**: the fixed C/C++ reserved-word set (`int`, `while`, `nullptr`, ...)
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`, ASCII only
//! - **Numbers**: `42`, `3.14`, `6.02e23`, `1.5E-3`
//! - **Strings**: `"text"` with `\n \t \r \\ \"` escapes, stored decoded
//! - **Operators**: `+ - * / % = == != < <= > >= && || ++ -- += -= *= /= %= & | ^ ~ << >> <<= >>= -> . ?: ? :`
//! - **Separators**: `( ) { } [ ] ; , #`
//!
//! Whitespace and `//` / `/* */` comments are skipped. Malformed input
//! becomes an `ERROR` token plus a diagnostic, unless stop-on-error mode is
//! set, in which case the first diagnostic ends the pass.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{LexerConfig, OperatorMatching, OperatorTable};
pub use cursor::Cursor;
pub use error::{InvalidOperatorError, LexError, ParseOperatorMatchingError};
pub use lexer::{Lexer, Scanned, Step, TokenStream};
pub use token::{is_keyword, Token, TokenKind, KEYWORDS};

/// Tokenizes `source` in one pass.
///
/// # Errors
///
/// Returns [`LexError::Aborted`] when `config.stop_on_error` is set and the
/// source has a lexical error.
pub fn tokenize(source: &str, config: &LexerConfig) -> Result<TokenStream, LexError> {
    Lexer::with_config(source, config.clone()).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper to collect all tokens from source, end-of-stream excluded.
    fn lex_all(source: &str) -> Vec<Token> {
        let stream = tokenize(source, &LexerConfig::default()).unwrap();
        let (mut tokens, _) = stream.into_parts();
        tokens.pop();
        tokens
    }

    fn tok(kind: TokenKind, lexeme: &str, line: u32, column: u32) -> Token {
        Token::new(kind, lexeme, line, column)
    }

    #[test]
    fn test_hello_world_program() {
        let source = r#"#include <stdio.h>

int main(void) {
    printf("Hello, %s!\n", "clex");
    return 0;
}
"#;
        let stream = tokenize(source, &LexerConfig::default()).unwrap();
        assert!(stream.diagnostics().is_empty(), "{:?}", stream.messages());

        let tokens = stream.tokens();
        assert_eq!(tokens[0], tok(TokenKind::Separator, "#", 1, 1));
        assert_eq!(tokens[1], tok(TokenKind::Identifier, "include", 1, 2));
        assert_eq!(tokens[2], tok(TokenKind::Operator, "<", 1, 10));
        assert!(tokens.contains(&tok(TokenKind::Keyword, "int", 3, 1)));
        assert!(tokens.contains(&tok(TokenKind::StringLiteral, "Hello, %s!\n", 4, 12)));
        assert!(tokens.contains(&tok(TokenKind::Keyword, "return", 5, 5)));
        assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::EndOfStream));
    }

    #[test]
    fn test_loop_program() {
        let source = "for (int i = 0; i < n; ++i) { total += a[i] * 2.5e-1; }";
        let kinds: Vec<_> = lex_all(source).iter().map(|t| t.kind()).collect();
        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![
                Keyword, Separator, Keyword, Identifier, Operator, Number, Separator, Identifier,
                Operator, Identifier, Separator, Operator, Identifier, Separator, Separator,
                Identifier, Operator, Identifier, Separator, Identifier, Separator, Operator,
                Number, Separator, Separator,
            ]
        );
    }

    #[test]
    fn test_class_declaration() {
        let source = "class Point { public: virtual double norm() const; };";
        let tokens = lex_all(source);
        let keywords: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Keyword)
            .map(|t| t.lexeme())
            .collect();
        assert_eq!(keywords, vec!["class", "public", "virtual", "double", "const"]);
        assert!(tokens.contains(&tok(TokenKind::Operator, ":", 1, 21)));
    }

    #[test]
    fn test_error_recovery_continues() {
        let source = "int x = 1.2.3 @ \"open\n y = 9z;";
        let stream = tokenize(source, &LexerConfig::default()).unwrap();
        let messages = stream.messages();
        assert_eq!(messages.len(), 4);
        assert!(messages[0].starts_with("malformed number '1.2'"));
        assert!(messages[1].starts_with("unexpected character '@'"));
        assert!(messages[2].starts_with("unterminated string literal"));
        assert!(messages[3].starts_with("identifier cannot start with a digit: '9z'"));
        assert!(stream.tokens().last().is_some_and(|t| t.is_eof()));
    }

    #[test]
    fn test_line_column_tracking() {
        let source = "int\n  x\n\t=\n42";
        let tokens = lex_all(source);
        let positions: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, vec![(1, 1), (2, 3), (3, 2), (4, 1)]);
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_comments_only() {
        assert!(lex_all("// comment\n/* block */\n// another").is_empty());
    }

    #[test]
    fn test_tokenize_is_repeatable() {
        let source = "a = \"x\\n\" + 1e3; $ /* tail";
        let config = LexerConfig::default();
        assert_eq!(tokenize(source, &config), tokenize(source, &config));
    }

    #[test]
    fn test_stop_on_error_keeps_prefix() {
        let config = LexerConfig::default().with_stop_on_error(true);
        let err = tokenize("a b \"c", &config).unwrap_err();
        assert_eq!(err.tokens().len(), 2);
        assert_eq!(
            err.diagnostic().message,
            "unterminated string literal starting at line 1, column 5"
        );
    }

    #[test]
    fn test_token_display() {
        let rendered: Vec<String> = tokenize("x=\"a b\"", &LexerConfig::default())
            .unwrap()
            .tokens()
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "IDENTIFIER x 1:1",
                "OPERATOR = 1:2",
                "STRING_LITERAL a b 1:3",
                "EOF  1:8",
            ]
        );
    }
}
