//! Output writers.
//!
//! Everything is written to caller-supplied writers so the binary can pass
//! locked stdout/stderr and tests can pass buffers.

use std::io::{self, Write};

use clap::ValueEnum;
use clex_lex::Token;
use clex_util::Diagnostic;
use serde::Deserialize;

use crate::error::Result;
use crate::stats::Statistics;

/// What the driver prints on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitKind {
    /// Token counts by group and lexeme
    #[default]
    Stats,
    /// One `KIND lexeme line:column` line per token
    Tokens,
    /// The token list as a JSON array
    Json,
}

/// Writes one line per token.
pub fn write_tokens(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Writes the tokens as a pretty-printed JSON array.
pub fn write_json(out: &mut impl Write, tokens: &[Token]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the statistics report.
pub fn write_stats(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    write!(out, "{}", Statistics::from_tokens(tokens))
}

/// Writes the diagnostics report, each entry rendered against `source`.
pub fn write_diagnostics(
    err: &mut impl Write,
    diagnostics: &[Diagnostic],
    source: &str,
) -> io::Result<()> {
    writeln!(err, "Lexical errors:")?;
    for diagnostic in diagnostics {
        writeln!(err, "{}", diagnostic.render(source))?;
    }
    Ok(())
}
