//! Source loading.
//!
//! All input files are scanned as one buffer: each file's text followed by
//! a newline, in command-line order.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DriverError, Result};

/// A file that could not be read and was left out of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reason, self.path.display())
    }
}

/// The concatenated input of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet {
    text: String,
    loaded: Vec<PathBuf>,
    skipped: Vec<SkippedFile>,
}

impl SourceSet {
    /// The concatenated buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Files that made it into the buffer.
    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }

    /// Files that were skipped.
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    fn push_file(&mut self, path: &Path) {
        if !path.exists() {
            debug!(path = %path.display(), "skipping missing file");
            self.skipped.push(SkippedFile {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
            return;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "loaded source file");
                self.text.push_str(&content);
                self.text.push('\n');
                self.loaded.push(path.to_path_buf());
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                self.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: format!("failed to read file ({})", e),
                });
            },
        }
    }
}

/// Reads and concatenates `paths`.
///
/// # Errors
///
/// [`DriverError::NoInputFiles`] if `paths` is empty. Files that cannot be
/// read are not errors; they are listed in [`SourceSet::skipped`].
pub fn load_sources(paths: &[PathBuf]) -> Result<SourceSet> {
    if paths.is_empty() {
        return Err(DriverError::NoInputFiles);
    }

    let mut sources = SourceSet::default();
    for path in paths {
        sources.push_file(path);
    }
    Ok(sources)
}
