//! Configuration module for the clex driver.
//!
//! This module handles loading the `clex.toml` file. Command-line flags
//! override the values found here.

use std::path::{Path, PathBuf};

use clex_lex::{LexerConfig, OperatorMatching, OperatorTable};
use dirs::{config_dir, home_dir};
use serde::Deserialize;
use tracing::debug;

use crate::emit::EmitKind;
use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "clex.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Scanner settings.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Abort on the first lexical error.
    #[serde(default)]
    pub stop_on_error: bool,

    /// Accept exponents in number literals.
    #[serde(default = "default_true")]
    pub exponents: bool,

    /// Operator splitting strategy.
    #[serde(default)]
    pub operator_matching: OperatorMatching,

    /// Operators added to the default table.
    #[serde(default)]
    pub extra_operators: Vec<String>,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputSection {
    /// What to print on stdout.
    #[serde(default)]
    pub emit: EmitKind,
}

fn default_true() -> bool {
    true
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            stop_on_error: false,
            exponents: true,
            operator_matching: OperatorMatching::default(),
            extra_operators: Vec::new(),
        }
    }
}

impl LexerSection {
    /// Builds the scanner configuration these settings describe.
    ///
    /// # Errors
    ///
    /// [`DriverError::Config`] when an entry of `extra_operators` is not a
    /// valid operator.
    pub fn to_lexer_config(&self) -> Result<LexerConfig> {
        let operators = self
            .extra_operators
            .iter()
            .try_fold(OperatorTable::c_family(), |table, op| {
                table.try_with_operator(op.as_str())
            })
            .map_err(|e| DriverError::Config(format!("Invalid extra operator: {}", e)))?;

        Ok(LexerConfig::default()
            .with_stop_on_error(self.stop_on_error)
            .with_exponents(self.exponents)
            .with_operator_matching(self.operator_matching)
            .with_operators(operators))
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/clex/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("clex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("clex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
