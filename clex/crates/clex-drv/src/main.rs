//! clex CLI - lexical scanner for C-family source files.
//!
//! This is the main entry point for the clex binary. It parses the command
//! line with clap, sets up logging, merges the configuration file with the
//! flags and runs one scanning session.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clex_drv::{Config, DriverError, EmitKind, Outcome, Result, Session};
use clex_lex::OperatorMatching;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// clex - lexical scanner for C-family source files
///
/// Scans all FILES as one buffer and prints token statistics. Lexical errors
/// are listed on stderr and make the exit code 2.
#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical scanner for C-family source files", long_about = None)]
struct Cli {
    /// Source files, scanned in order as one buffer
    files: Vec<PathBuf>,

    /// Abort on the first lexical error
    #[arg(long, visible_alias = "stopOnError")]
    stop_on_error: bool,

    /// Output format [default: stats]
    #[arg(long, value_enum)]
    emit: Option<EmitKind>,

    /// Treat `e`/`E` after a number as an invalid identifier
    #[arg(long)]
    no_exponents: bool,

    /// How runs of operator characters are split (all-or-nothing, longest-prefix)
    #[arg(long)]
    operator_matching: Option<OperatorMatching>,

    /// Enable verbose output
    #[arg(short, long, env = "CLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "CLEX_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        },
    }
}

fn try_main(cli: Cli) -> anyhow::Result<Outcome> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let session = build_session(cli, &config).context("failed to load configuration")?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = session.run(&mut stdout.lock(), &mut stderr.lock())?;
    Ok(outcome)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the report on stdout.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Merge flags over the configuration file. A flag that is set always wins.
fn build_session(cli: Cli, config: &Config) -> Result<Session> {
    let mut lexer = config.lexer.clone();
    lexer.stop_on_error |= cli.stop_on_error;
    lexer.exponents &= !cli.no_exponents;
    if let Some(matching) = cli.operator_matching {
        lexer.operator_matching = matching;
    }

    Ok(Session {
        files: cli.files,
        lexer: lexer.to_lexer_config()?,
        emit: cli.emit.unwrap_or(config.output.emit),
    })
}
