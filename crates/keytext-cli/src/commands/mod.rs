//! CLI command implementations.

mod check;
mod coverage;
mod translate;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use translate::{TranslateArgs, run_translate};

use std::path::Path;

use keytext::Dictionary;

use crate::load::{LoadError, load_dictionary};
use crate::output::DictionaryDiagnostic;

/// Load a dictionary, turning parse failures into source diagnostics.
fn load_or_report(path: &Path) -> miette::Result<Dictionary> {
    load_dictionary(path).map_err(into_report)
}

/// Render a load error, pointing at the failing source location when known.
fn into_report(err: LoadError) -> miette::Report {
    match err {
        LoadError::Parse {
            path,
            line,
            column,
            message,
            content,
        } => DictionaryDiagnostic::at(&path, &content, line, column, &message).into(),
        LoadError::Io { .. } => miette::miette!("{err}"),
    }
}
