//! Reading dictionaries from JSON files.

use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use keytext::Dictionary;
use thiserror::Error;
use tracing::debug;

/// Errors that occur while loading a dictionary file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the dictionary.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON syntax or shape error with location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
        /// The text that failed to parse, kept for source diagnostics.
        content: String,
    },
}

/// Read and parse the dictionary at `path`.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, LoadError> {
    let content = read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dictionary = parse_dictionary(path, &content)?;
    debug!(path = %path.display(), entries = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

/// Parse dictionary JSON, attributing errors to `path`.
pub fn parse_dictionary(path: &Path, content: &str) -> Result<Dictionary, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
        content: content.to_string(),
    })
}
