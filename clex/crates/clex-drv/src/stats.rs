//! Token statistics.
//!
//! Error and end-of-stream tokens are not counted. Identifiers, string
//! literals and numbers are counted per kind; every other token is counted
//! per lexeme.

use std::fmt;

use clex_lex::{Token, TokenKind};
use indexmap::IndexMap;

/// Kinds counted as one group row each, in report order.
pub const GROUP_KINDS: [TokenKind; 3] = [
    TokenKind::Identifier,
    TokenKind::StringLiteral,
    TokenKind::Number,
];

/// Counts over one token stream.
///
/// # Example
///
/// ```
/// use clex_drv::stats::Statistics;
/// use clex_lex::{tokenize, LexerConfig, TokenKind};
///
/// let stream = tokenize("x = x + 1;", &LexerConfig::default()).unwrap();
/// let stats = Statistics::from_tokens(stream.tokens());
/// assert_eq!(stats.total(), 6);
/// assert_eq!(stats.group_count(TokenKind::Identifier), 2);
/// assert_eq!(stats.lexeme_rows()[0], ("=", 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    total: usize,
    groups: IndexMap<TokenKind, usize>,
    lexemes: IndexMap<String, usize>,
}

impl Statistics {
    /// Counts `tokens`.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut groups: IndexMap<TokenKind, usize> =
            GROUP_KINDS.iter().map(|&kind| (kind, 0)).collect();
        let mut lexemes: IndexMap<String, usize> = IndexMap::new();
        let mut total = 0;

        for token in tokens {
            if matches!(token.kind(), TokenKind::EndOfStream | TokenKind::Error) {
                continue;
            }
            total += 1;

            match groups.get_mut(&token.kind()) {
                Some(count) => *count += 1,
                None => *lexemes.entry(token.lexeme().to_string()).or_insert(0) += 1,
            }
        }

        Self {
            total,
            groups,
            lexemes,
        }
    }

    /// Number of counted tokens.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for one of the [`GROUP_KINDS`]; zero for any other kind.
    pub fn group_count(&self, kind: TokenKind) -> usize {
        self.groups.get(&kind).copied().unwrap_or(0)
    }

    /// Per-lexeme counts, highest first. Equal counts keep the order in
    /// which the lexemes first appeared.
    pub fn lexeme_rows(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .lexemes
            .iter()
            .map(|(lexeme, &count)| (lexeme.as_str(), count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    /// Share of the total as a percentage, 0 when nothing was counted.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total as f64
        }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, name: &str, count: usize) -> fmt::Result {
        writeln!(
            f,
            "  {:<15} : {:>5} ({:.2}%)",
            name,
            count,
            self.percentage(count)
        )
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total tokens: {}", self.total)?;
        writeln!(f, "Token group statistics:")?;
        for (kind, &count) in &self.groups {
            self.write_row(f, kind.as_str(), count)?;
        }
        for (lexeme, count) in self.lexeme_rows() {
            self.write_row(f, lexeme, count)?;
        }
        Ok(())
    }
}
