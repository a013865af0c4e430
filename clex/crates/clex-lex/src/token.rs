//! Token definitions.
//!
//! A [`Token`] is an immutable value: a [`TokenKind`], the lexeme, and the
//! 1-based line and column of its first character.

use std::fmt;

/// Reserved words, sorted so lookups can binary search.
pub const KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "char", "class", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "false", "float", "for", "goto", "if", "int", "long",
    "namespace", "nullptr", "private", "protected", "public", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "template", "true", "typedef", "typename",
    "union", "unsigned", "using", "virtual", "void", "volatile", "while",
];

/// Returns true if `text` is a reserved word. Case-sensitive.
///
/// ```
/// use clex_lex::token::is_keyword;
///
/// assert!(is_keyword("nullptr"));
/// assert!(!is_keyword("Int"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}

/// Token category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TokenKind {
    /// Reserved word
    Keyword,
    /// Name that is not a reserved word
    Identifier,
    /// Integer or floating literal
    Number,
    /// String literal; the lexeme holds the decoded content
    StringLiteral,
    /// Operator from the operator table
    Operator,
    /// Single-character separator
    Separator,
    /// Comment text; comments are skipped, so this kind is never produced
    Comment,
    /// Malformed input; the lexeme holds the offending text
    Error,
    /// End of input, always the last token
    #[cfg_attr(feature = "serde", serde(rename = "EOF"))]
    EndOfStream,
}

impl TokenKind {
    /// Name used when printing tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Comment => "COMMENT",
            TokenKind::Error => "ERROR",
            TokenKind::EndOfStream => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with its position.
///
/// # Example
///
/// ```
/// use clex_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Keyword, "int", 3, 5);
/// assert_eq!(token.to_string(), "KEYWORD int 3:5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u32,
    column: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Creates the end-of-stream token.
    pub fn end_of_stream(line: u32, column: u32) -> Self {
        Self::new(TokenKind::EndOfStream, String::new(), line, column)
    }

    /// Token category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Exact text, or decoded content for string literals.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Line of the first character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the first character (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true for the end-of-stream token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfStream
    }

    /// Returns true for error tokens.
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}:{}", self.kind, self.lexeme, self.line, self.column)
    }
}
