//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Span};

/// A source line with a caret underline, for display under a diagnostic.
///
/// # Examples
///
/// ```
/// use clex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("int x = @;", 1, 9, 10);
/// assert_eq!(snippet.format(), "  1 | int x = @;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column just past the issue (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Extract the line a span starts on from the scanned buffer.
    ///
    /// The underline is clipped to the end of that line, so a span that
    /// runs across a newline (an unterminated comment, say) only marks its
    /// first line. Returns `None` when the span does not fall inside
    /// `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::diagnostic::SourceSnippet;
    /// use clex_util::Span;
    ///
    /// let source = "int a;\nx = 1.2.3;\n";
    /// let snippet = SourceSnippet::from_source(source, Span::new(11, 14, 2, 5)).unwrap();
    /// assert_eq!(snippet.line, "x = 1.2.3;");
    /// assert_eq!(snippet.start_column, 5);
    /// assert_eq!(snippet.end_column, 8);
    /// ```
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        if span.is_dummy() || span.start > source.len() {
            return None;
        }
        let before = source.get(..span.start)?;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[span.start..]
            .find('\n')
            .map_or(source.len(), |i| span.start + i);

        let line = source[line_start..line_end].trim_end_matches('\r');
        let marked_end = span.end.min(line_end);
        let width = source
            .get(span.start..marked_end)
            .map_or(0, |text| text.chars().count());

        let start_column = span.column as usize;
        Some(Self::new(
            line,
            span.line as usize,
            start_column,
            start_column + width.max(1),
        ))
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed with its number, followed by a
    /// caret line pointing at the marked columns. Tabs before the marked
    /// columns are repeated in the caret line so the carets stay aligned.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        let indent: String = self
            .line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(underline_start)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        result.push_str(&indent);
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use clex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use clex_util::Span;
///
/// let diag = DiagnosticBuilder::error("unknown operator '=-' at line 1, column 3")
///     .code(DiagnosticCode::E_LEXER_UNKNOWN_OPERATOR)
///     .span(Span::new(2, 4, 1, 3))
///     .help("separate the operators with whitespace")
///     .build();
///
/// assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNKNOWN_OPERATOR));
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    ///
    /// Notes provide additional context about the diagnostic.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &mut Handler) {
        handler.emit(self.build());
    }
}
