//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Args;
use keytext::compute_suggestions;
use miette::Result;
use serde::Serialize;

use super::load_or_report;
use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source language dictionary (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    extra: Vec<String>,
}

/// Compare the keys of one translation against the source keys.
fn compare_keys(language: &str, source: &[String], translated: &[String]) -> LanguageCoverage {
    let source_set: BTreeSet<&String> = source.iter().collect();
    let translated_set: BTreeSet<&String> = translated.iter().collect();

    LanguageCoverage {
        language: language.to_string(),
        translated: source_set.intersection(&translated_set).count(),
        missing: source
            .iter()
            .filter(|key| !translated_set.contains(key))
            .cloned()
            .collect(),
        extra: translated
            .iter()
            .filter(|key| !source_set.contains(key))
            .cloned()
            .collect(),
    }
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source_keys = load_or_report(&args.source)?.leaf_keys();
    let source_count = source_keys.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{}.json", lang));
        let translated_keys = if lang_file.exists() {
            load_or_report(&lang_file)?.leaf_keys()
        } else {
            // File doesn't exist - all keys are missing
            Vec::new()
        };
        coverage_data.push(compare_keys(lang, &source_keys, &translated_keys));
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
                extra: c.extra.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data)
            .map_err(|e| miette::miette!("Failed to serialize coverage: {e}"))?;
        println!("{}", json_output);
    } else {
        println!("{}", format_coverage_table(source_count, &coverage_data));

        for lang_coverage in &coverage_data {
            if lang_coverage.missing.is_empty() {
                continue;
            }
            println!("\nMissing in {}:", lang_coverage.language);
            for key in &lang_coverage.missing {
                // An extra key close to a missing one is most likely a rename.
                match compute_suggestions(key, &lang_coverage.extra).first() {
                    Some(renamed) => println!("  - {} (found '{}')", key, renamed),
                    None => println!("  - {}", key),
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
