//! Error types for the scanner.

use clex_util::Diagnostic;
use thiserror::Error;

use crate::token::Token;

/// A tokenization pass that did not run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Stop-on-error mode hit its first diagnostic.
    ///
    /// `tokens` holds everything produced before the fatal point; it never
    /// contains an end-of-stream token.
    #[error("scanning aborted: {diagnostic}")]
    Aborted {
        /// The diagnostic that ended the pass.
        diagnostic: Diagnostic,
        /// Tokens produced before the abort.
        tokens: Vec<Token>,
    },
}

impl LexError {
    /// The diagnostic that ended the pass.
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            LexError::Aborted { diagnostic, .. } => diagnostic,
        }
    }

    /// Tokens produced before the pass ended.
    pub fn tokens(&self) -> &[Token] {
        match self {
            LexError::Aborted { tokens, .. } => tokens,
        }
    }

    /// Splits the error into its partial tokens and fatal diagnostic.
    pub fn into_parts(self) -> (Vec<Token>, Diagnostic) {
        match self {
            LexError::Aborted { diagnostic, tokens } => (tokens, diagnostic),
        }
    }
}

/// Error returned when parsing an unknown operator matching strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator matching strategy '{0}' (expected 'all-or-nothing' or 'longest-prefix')")]
pub struct ParseOperatorMatchingError(String);

impl ParseOperatorMatchingError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Error returned when an operator cannot be added to an
/// [`OperatorTable`](crate::config::OperatorTable).
///
/// An operator is a non-empty run of ASCII punctuation. `_`, `"` and the
/// separators `( ) { } [ ] ; , #` are excluded, since they already belong
/// to identifiers, string literals and separators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOperatorError {
    /// The operator is the empty string.
    #[error("operator must not be empty")]
    Empty,

    /// The operator contains a character that cannot appear in an operator.
    #[error("invalid operator {operator:?}: {found:?} cannot appear in an operator")]
    InvalidChar {
        /// The rejected operator.
        operator: String,
        /// The first offending character.
        found: char,
    },
}
