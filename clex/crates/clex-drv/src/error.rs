//! Error handling module for the clex driver.
//!
//! This module provides the driver's error type using `thiserror`. Lexical
//! errors in the scanned source are not driver errors; they are reported as
//! diagnostics and change the exit code only.

use thiserror::Error;

/// Main error type for the clex driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// No source files were named on the command line.
    #[error("no input files (usage: clex [--stop-on-error] <file1.cpp> [file2.cpp ...])")]
    NoInputFiles,

    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
