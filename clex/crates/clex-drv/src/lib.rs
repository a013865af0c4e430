//! clex-drv - Scanner Driver
//!
//! Reads the input files into one buffer, runs one tokenization pass over
//! it and reports the result: statistics, a token listing or JSON on
//! stdout, and the lexical errors on stderr.

#![warn(missing_docs)]

pub mod config;
pub mod emit;
pub mod error;
pub mod source;
pub mod stats;

use std::io::Write;
use std::path::PathBuf;

use clex_lex::{tokenize, LexError, LexerConfig};
use tracing::debug;

pub use config::Config;
pub use emit::EmitKind;
pub use error::{DriverError, Result};

/// How a run ended, when the driver itself did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input is lexically valid.
    Clean,
    /// At least one diagnostic was reported.
    Diagnostics,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Clean => 0,
            Outcome::Diagnostics => 2,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Input files, scanned in order as one buffer.
    pub files: Vec<PathBuf>,
    /// Scanner configuration.
    pub lexer: LexerConfig,
    /// What to print on stdout.
    pub emit: EmitKind,
}

impl Session {
    /// Creates a session with default scanner and output settings.
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            lexer: LexerConfig::default(),
            emit: EmitKind::default(),
        }
    }

    /// Runs the session, writing the report to `out` and skipped files and
    /// diagnostics to `err`.
    ///
    /// # Errors
    ///
    /// [`DriverError::NoInputFiles`] when no files were given, or an I/O
    /// error from the writers.
    pub fn run(&self, out: &mut impl Write, err: &mut impl Write) -> Result<Outcome> {
        let sources = source::load_sources(&self.files)?;
        for skipped in sources.skipped() {
            writeln!(err, "{}", skipped)?;
        }
        debug!(
            loaded = sources.loaded().len(),
            skipped = sources.skipped().len(),
            bytes = sources.text().len(),
            "sources ready"
        );

        let (tokens, diagnostics) = match tokenize(sources.text(), &self.lexer) {
            Ok(stream) => stream.into_parts(),
            Err(LexError::Aborted { diagnostic, tokens }) => (tokens, vec![diagnostic]),
        };

        match self.emit {
            EmitKind::Stats => emit::write_stats(out, &tokens)?,
            EmitKind::Tokens => emit::write_tokens(out, &tokens)?,
            EmitKind::Json => emit::write_json(out, &tokens)?,
        }
        out.flush()?;

        if diagnostics.is_empty() {
            return Ok(Outcome::Clean);
        }
        emit::write_diagnostics(err, &diagnostics, sources.text())?;
        Ok(Outcome::Diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run(session: &Session) -> (Result<Outcome>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = session.run(&mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_clean_run() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "main.cpp", "int main() { return 0; }");
        let (result, out, err) = run(&Session::new(vec![file]));
        assert_eq!(result.unwrap(), Outcome::Clean);
        assert!(out.starts_with("Total tokens: 9\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_with_diagnostics() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "bad.cpp", "int x = 1.2.3;");
        let (result, out, err) = run(&Session::new(vec![file]));
        assert_eq!(result.unwrap(), Outcome::Diagnostics);
        assert!(out.contains("Total tokens: 6"));
        assert!(err.contains("Lexical errors:"));
        assert!(err.contains("malformed number '1.2' at line 1, column 9"));
    }

    #[test]
    fn test_files_are_concatenated() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.cpp", "int a;");
        let b = write_file(&dir, "b.cpp", "@");
        let mut session = Session::new(vec![a, b]);
        session.emit = EmitKind::Tokens;
        let (_, out, err) = run(&session);
        assert!(out.contains("ERROR @ 2:1"));
        assert!(err.contains("at line 2, column 1"));
    }

    #[test]
    fn test_stop_on_error_reports_partial_stream() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "bad.cpp", "a b @ c d");
        let mut session = Session::new(vec![file]);
        session.lexer = LexerConfig::default().with_stop_on_error(true);
        session.emit = EmitKind::Tokens;
        let (result, out, err) = run(&session);
        assert_eq!(result.unwrap(), Outcome::Diagnostics);
        assert_eq!(out, "IDENTIFIER a 1:1\nIDENTIFIER b 1:3\n");
        assert_eq!(err.matches("error[E1001]").count(), 1);
    }

    #[test]
    fn test_missing_file_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.cpp");
        let (result, out, err) = run(&Session::new(vec![missing]));
        assert_eq!(result.unwrap(), Outcome::Clean);
        assert!(out.starts_with("Total tokens: 0"));
        assert!(err.starts_with("file not found: "));
    }

    #[test]
    fn test_no_input_files() {
        let (result, out, _) = run(&Session::new(Vec::new()));
        assert!(matches!(result, Err(DriverError::NoInputFiles)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Clean.exit_code(), 0);
        assert_eq!(Outcome::Diagnostics.exit_code(), 2);
    }
}
