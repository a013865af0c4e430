//! Scanner configuration.
//!
//! One engine serves every supported number and operator grammar; the
//! differences live here as data. [`LexerConfig::default`] is the C-family
//! grammar with exponent literals and all-or-nothing operator matching.

use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::classify::is_separator;
use crate::error::{InvalidOperatorError, ParseOperatorMatchingError};

/// Operators of the default table.
pub const C_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "==", "!=", "<", "<=", ">", ">=", "&&", "||", "++", "--", "+=",
    "-=", "*=", "/=", "%=", "&", "|", "^", "~", "<<", ">>", "<<=", ">>=", "->", ".", "?:", "?",
    ":",
];

/// How a run of operator characters is split into tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum OperatorMatching {
    /// Collect the whole operator-character run (up to the table's longest
    /// operator) and accept it only if the entire run is an operator.
    /// Anything else is one error token covering the run.
    #[default]
    AllOrNothing,
    /// Emit the longest table entry that matches at the cursor and leave
    /// the rest for the next token. A character that starts no entry is a
    /// one-character error.
    LongestPrefix,
}

impl OperatorMatching {
    /// Name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorMatching::AllOrNothing => "all-or-nothing",
            OperatorMatching::LongestPrefix => "longest-prefix",
        }
    }
}

impl FromStr for OperatorMatching {
    type Err = ParseOperatorMatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all-or-nothing" => Ok(OperatorMatching::AllOrNothing),
            "longest-prefix" => Ok(OperatorMatching::LongestPrefix),
            other => Err(ParseOperatorMatchingError::new(other)),
        }
    }
}

/// The set of recognised operators.
///
/// The operator-start characters are every character that occurs in some
/// operator, and the matching window is the length of the longest operator.
/// Operators are ASCII punctuation only, so a table can never claim
/// identifier, string, separator or whitespace characters.
///
/// ```
/// use clex_lex::config::OperatorTable;
///
/// let table = OperatorTable::c_family();
/// assert!(table.contains("<<="));
/// assert_eq!(table.max_len(), 3);
/// assert!(table.is_operator_char('?'));
///
/// let table = table.try_with_operator("::")?.try_with_operator("->*")?;
/// assert!(table.contains("::"));
/// assert_eq!(table.max_len(), 3);
///
/// assert!(OperatorTable::c_family().try_with_operator("##").is_err());
/// # Ok::<(), clex_lex::InvalidOperatorError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorTable {
    operators: FxHashSet<String>,
    chars: FxHashSet<char>,
    max_len: usize,
}

impl OperatorTable {
    fn empty() -> Self {
        Self {
            operators: FxHashSet::default(),
            chars: FxHashSet::default(),
            max_len: 0,
        }
    }

    /// Builds a table from a list of operators.
    ///
    /// # Errors
    ///
    /// Fails on the first operator that is empty or contains a character
    /// other than operator punctuation.
    pub fn new<I, S>(operators: I) -> Result<Self, InvalidOperatorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        operators
            .into_iter()
            .try_fold(Self::empty(), |table, op| table.try_with_operator(op))
    }

    /// The default C-family table.
    pub fn c_family() -> Self {
        let mut table = Self::empty();
        for op in C_OPERATORS {
            table.insert(op.to_string());
        }
        table
    }

    /// Returns the table with one more operator.
    ///
    /// # Errors
    ///
    /// [`InvalidOperatorError`] if `op` is empty or contains whitespace, an
    /// identifier character, `"`, a separator or any non-punctuation
    /// character.
    pub fn try_with_operator(mut self, op: impl Into<String>) -> Result<Self, InvalidOperatorError> {
        let op = op.into();
        validate_operator(&op)?;
        self.insert(op);
        Ok(self)
    }

    fn insert(&mut self, op: String) {
        self.chars.extend(op.chars());
        self.max_len = self.max_len.max(op.chars().count());
        self.operators.insert(op);
    }

    /// Returns true if `text` is exactly one operator.
    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.operators.contains(text)
    }

    /// Returns true if `c` occurs in some operator.
    #[inline]
    pub fn is_operator_char(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Length in characters of the longest operator.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of operators in the table.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns true if the table has no operators.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

fn is_operator_punct(c: char) -> bool {
    c.is_ascii_punctuation() && c != '_' && c != '"' && !is_separator(c)
}

fn validate_operator(op: &str) -> Result<(), InvalidOperatorError> {
    if op.is_empty() {
        return Err(InvalidOperatorError::Empty);
    }
    match op.chars().find(|&c| !is_operator_punct(c)) {
        Some(found) => Err(InvalidOperatorError::InvalidChar {
            operator: op.to_string(),
            found,
        }),
        None => Ok(()),
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::c_family()
    }
}

/// Configuration for one tokenization pass.
///
/// # Example
///
/// ```
/// use clex_lex::config::{LexerConfig, OperatorMatching};
///
/// let config = LexerConfig::default()
///     .with_stop_on_error(true)
///     .with_operator_matching(OperatorMatching::LongestPrefix);
/// assert!(config.stop_on_error);
/// assert!(config.exponents);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Abort the pass on the first diagnostic instead of recovering.
    pub stop_on_error: bool,
    /// Accept `e`/`E` exponents in number literals.
    pub exponents: bool,
    /// Operator splitting strategy.
    pub operator_matching: OperatorMatching,
    /// Recognised operators.
    pub operators: OperatorTable,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            stop_on_error: false,
            exponents: true,
            operator_matching: OperatorMatching::default(),
            operators: OperatorTable::default(),
        }
    }
}

impl LexerConfig {
    /// Sets stop-on-error mode.
    pub fn with_stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = stop_on_error;
        self
    }

    /// Enables or disables exponent literals.
    pub fn with_exponents(mut self, exponents: bool) -> Self {
        self.exponents = exponents;
        self
    }

    /// Sets the operator splitting strategy.
    pub fn with_operator_matching(mut self, matching: OperatorMatching) -> Self {
        self.operator_matching = matching;
        self
    }

    /// Replaces the operator table.
    pub fn with_operators(mut self, operators: OperatorTable) -> Self {
        self.operators = operators;
        self
    }
}
