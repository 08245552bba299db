//! Miette diagnostic wrapper for dictionary parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for dictionary JSON errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid dictionary: {message}")]
#[diagnostic(code(keytext::syntax))]
pub struct DictionaryDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl DictionaryDiagnostic {
    /// Create a diagnostic pointing at `line:column` of `content`.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: &str) -> Self {
        DictionaryDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message: message.to_string(),
            help: Some("dictionaries are JSON objects of strings and nested objects".into()),
        }
    }
}

/// Convert a 1-based line/column to a byte offset, clamped to `content`.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);

    // Clamp offset to content length to avoid miette panic on out-of-bounds
    offset.min(content.len())
}
