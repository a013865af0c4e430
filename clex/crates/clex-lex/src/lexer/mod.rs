//! Lexer module.
//!
//! The scanner is split into focused components:
//! - `core` - the `Lexer` engine, dispatch and error policy
//! - `comment` - whitespace and comment skipping
//! - `identifier` - identifier and keyword scanning
//! - `number` - number literal scanning
//! - `string` - string literal scanning and escape decoding
//! - `operator` - operator and separator scanning

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{Lexer, Scanned, Step, TokenStream};
