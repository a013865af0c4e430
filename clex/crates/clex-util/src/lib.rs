//! clex-util - Shared foundation types for the clex scanner.
//!
//! This crate holds the pieces every other clex crate needs but which carry
//! no scanning logic of their own:
//!
//! - [`span`] - source locations (byte range plus 1-based line/column)
//! - [`diagnostic`] - diagnostics, their codes, the collecting
//!   [`Handler`] and the fluent [`DiagnosticBuilder`]
//!
//! # Example
//!
//! ```
//! use clex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@' at line 1, column 1")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use span::Span;
