//! Implementation of the `keytext check` command.

use std::path::PathBuf;

use keytext::lint_dictionary;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::into_report;
use crate::load::load_dictionary;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Dictionary files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let report = match load_dictionary(path) {
            Ok(dictionary) => FileReport {
                file: path.display().to_string(),
                error: None,
                warnings: lint_dictionary(&dictionary)
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            },
            Err(e) => {
                let error = e.to_string();
                if !args.json {
                    eprintln!("{:?}", into_report(e));
                }
                FileReport {
                    file: path.display().to_string(),
                    error: Some(error),
                    warnings: Vec::new(),
                }
            }
        };
        reports.push(report);
    }

    let failed = reports
        .iter()
        .any(|r| r.error.is_some() || !r.warnings.is_empty());

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("JSON serialization should not fail")
        );
    } else {
        for report in &reports {
            if report.error.is_some() {
                continue;
            }
            if report.warnings.is_empty() {
                println!(
                    "{} {}",
                    "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                    report.file
                );
            } else {
                println!(
                    "{} {} ({} warning(s))",
                    "warn".if_supports_color(Stream::Stdout, |t| t.yellow()),
                    report.file,
                    report.warnings.len()
                );
                for warning in &report.warnings {
                    println!("  - {warning}");
                }
            }
        }
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
