//! Diagnostic module - Lexical error reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering the
//! diagnostics a scanning pass produces.
//!
//! # Examples
//!
//! ```
//! use clex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use clex_util::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal starting at line 1, column 1")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&mut handler);
//!
//! for diag in handler.diagnostics() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::fmt;

/// A lexical error with its location
///
/// The `message` is self-contained: it already names the offending text and
/// its position, so it can be shown on its own. `span` carries the same
/// position in machine-readable form.
///
/// # Examples
///
/// ```
/// use clex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use clex_util::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '$' at line 2, column 4")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(9, 10, 2, 4))
///     .build();
/// assert_eq!(diag.line(), 2);
/// assert_eq!(diag.to_string(), "error[E1001]: unexpected character '$' at line 2, column 4");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Line the diagnostic points at (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column the diagnostic points at, when it has one.
    pub fn column(&self) -> Option<u32> {
        (self.span.column > 0).then_some(self.span.column)
    }

    /// Render the diagnostic against the buffer it was produced from.
    ///
    /// The output is the `Display` header, the offending source line with a
    /// caret underline, then one line per note and help.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::diagnostic::DiagnosticBuilder;
    /// use clex_util::Span;
    ///
    /// let diag = DiagnosticBuilder::error("unexpected character '@' at line 1, column 5")
    ///     .span(Span::new(4, 5, 1, 5))
    ///     .help("remove it")
    ///     .build();
    /// let rendered = diag.render("int @;");
    /// assert!(rendered.contains("  1 | int @;"));
    /// assert!(rendered.ends_with("= help: remove it"));
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = self.to_string();
        if let Some(snippet) = SourceSnippet::from_source(source, self.span) {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n    = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n    = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// Diagnostics are kept in the order they were emitted and are never
/// deduplicated.
///
/// # Examples
///
/// ```
/// use clex_util::diagnostic::Handler;
/// use clex_util::Span;
///
/// let mut handler = Handler::new();
/// handler
///     .build_error(Span::new(0, 1, 1, 1), "unexpected character '@' at line 1, column 1")
///     .emit(&mut handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Record a diagnostic
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the handler, returning its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
