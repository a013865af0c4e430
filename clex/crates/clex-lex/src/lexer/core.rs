//! Core lexer implementation.
//!
//! This module contains the `Lexer` engine: the dispatch loop, the error
//! policy and the pass-level result types.

use clex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::classify::{is_digit, is_ident_start, is_separator};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Result of one lexeme scanner: the token, plus the diagnostic raised
/// while producing it, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scanned {
    /// The produced token.
    pub token: Token,
    /// Diagnostic for a malformed lexeme.
    pub diagnostic: Option<Diagnostic>,
}

impl Scanned {
    /// A well-formed lexeme.
    pub fn ok(token: Token) -> Self {
        Self {
            token,
            diagnostic: None,
        }
    }

    /// A malformed lexeme and its diagnostic.
    pub fn error(token: Token, diagnostic: Diagnostic) -> Self {
        Self {
            token,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Outcome of one engine step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The next token. The last one produced is the end-of-stream token.
    Produced(Token),
    /// Stop-on-error mode hit a diagnostic; the pass is over.
    Fatal(Diagnostic),
    /// The pass already finished.
    Exhausted,
}

/// Output of a completed tokenization pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl TokenStream {
    /// Tokens in emission order, ending with exactly one end-of-stream token.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Diagnostics in detection order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Plain message text of every diagnostic.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.message.clone()).collect()
    }

    /// Returns true if the pass recorded any diagnostic.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Splits the stream into tokens and diagnostics.
    pub fn into_parts(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// Lexer for C-family source text.
///
/// One `Lexer` is one tokenization pass over one buffer. It skips trivia,
/// dispatches on the next character to a lexeme scanner and folds the
/// scanner's diagnostic into its [`Handler`].
///
/// # Example
///
/// ```
/// use clex_lex::{Lexer, TokenKind};
///
/// let stream = Lexer::new("int x = 42;").tokenize().unwrap();
/// let kinds: Vec<_> = stream.tokens().iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Keyword,
///         TokenKind::Identifier,
///         TokenKind::Operator,
///         TokenKind::Number,
///         TokenKind::Separator,
///         TokenKind::EndOfStream,
///     ]
/// );
/// assert!(stream.diagnostics().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Pass configuration.
    pub(crate) config: LexerConfig,

    /// Diagnostics recorded so far.
    handler: Handler,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once the end-of-stream token or a fatal diagnostic was produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            handler: Handler::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Runs the pass to completion.
    ///
    /// # Errors
    ///
    /// In stop-on-error mode the first diagnostic returns
    /// [`LexError::Aborted`] with the tokens produced before it.
    pub fn tokenize(mut self) -> Result<TokenStream, LexError> {
        debug!(
            bytes = self.cursor.source().len(),
            stop_on_error = self.config.stop_on_error,
            "tokenization started"
        );

        let mut tokens = Vec::new();
        loop {
            match self.step() {
                Step::Produced(token) => {
                    let done = token.is_eof();
                    tokens.push(token);
                    if done {
                        break;
                    }
                },
                Step::Fatal(diagnostic) => {
                    debug!(
                        tokens = tokens.len(),
                        line = diagnostic.line(),
                        "tokenization aborted"
                    );
                    return Err(LexError::Aborted { diagnostic, tokens });
                },
                Step::Exhausted => break,
            }
        }

        debug!(
            tokens = tokens.len(),
            diagnostics = self.handler.error_count(),
            "tokenization finished"
        );
        Ok(TokenStream {
            tokens,
            diagnostics: self.handler.into_diagnostics(),
        })
    }

    /// Advances the pass by one token.
    pub fn step(&mut self) -> Step {
        if self.finished {
            return Step::Exhausted;
        }

        if let Some(diagnostic) = self.skip_trivia() {
            if let Some(fatal) = self.record(diagnostic) {
                return Step::Fatal(fatal);
            }
        }

        self.mark_token_start();

        if self.cursor.is_at_end() {
            self.finished = true;
            return Step::Produced(Token::end_of_stream(
                self.token_start_line,
                self.token_start_column,
            ));
        }

        let c = self.cursor.peek();
        let Scanned { token, diagnostic } = if is_ident_start(c) {
            self.scan_identifier()
        } else if is_digit(c) {
            self.scan_number()
        } else if c == '"' {
            self.scan_string()
        } else if self.config.operators.is_operator_char(c) {
            self.scan_operator()
        } else if is_separator(c) {
            self.scan_separator()
        } else {
            self.scan_unexpected()
        };

        if let Some(diagnostic) = diagnostic {
            if let Some(fatal) = self.record(diagnostic) {
                return Step::Fatal(fatal);
            }
        }
        Step::Produced(token)
    }

    /// Consumes one unrecognised character.
    fn scan_unexpected(&mut self) -> Scanned {
        let c = self.cursor.advance();
        let message = format!(
            "unexpected character '{}' {}",
            c.escape_debug(),
            self.location()
        );
        let diagnostic = self.error(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR, message);
        Scanned::error(self.token(TokenKind::Error, c.to_string()), diagnostic)
    }

    /// Records a diagnostic. In stop-on-error mode this ends the pass and
    /// hands the diagnostic back as fatal.
    fn record(&mut self, diagnostic: Diagnostic) -> Option<Diagnostic> {
        trace!(
            code = ?diagnostic.code,
            line = diagnostic.line(),
            message = %diagnostic.message,
            "lexical error"
        );
        self.handler.emit(diagnostic.clone());

        if self.config.stop_on_error {
            self.finished = true;
            Some(diagnostic)
        } else {
            None
        }
    }

    pub(crate) fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token positioned at the current token start.
    pub(crate) fn token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(
            kind,
            lexeme,
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Source text of the current token so far.
    pub(crate) fn token_text(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// `at line L, column C` for the current token start.
    pub(crate) fn location(&self) -> String {
        format!(
            "at line {}, column {}",
            self.token_start_line, self.token_start_column
        )
    }

    /// Builds an error diagnostic spanning the current token.
    pub(crate) fn error(&self, code: DiagnosticCode, message: String) -> Diagnostic {
        self.error_builder(code, message).build()
    }

    pub(crate) fn error_builder(&self, code: DiagnosticCode, message: String) -> DiagnosticBuilder {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        self.handler.build_error(span, message).code(code)
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.handler.diagnostics()
    }

    /// The active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields tokens through the end-of-stream token. A fatal diagnostic
    /// ends iteration early; it stays available through
    /// [`Lexer::diagnostics`].
    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Step::Produced(token) => Some(token),
            Step::Fatal(_) | Step::Exhausted => None,
        }
    }
}
