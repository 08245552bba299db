//! Static checks for dictionaries.
//!
//! Lookups never fail, so a malformed entry shows up at runtime only as an
//! untranslated key. These checks catch such entries ahead of time.

use std::collections::HashSet;

use thiserror::Error;

use crate::parser::{FormTag, parse_plural_form};
use crate::types::{Dictionary, Entry};

/// A problem found in a dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// A leaf that is neither text nor a nested dictionary.
    #[error("'{key}': value is not a string and will never resolve")]
    NonStringLeaf { key: String },

    /// A segment containing `.`, which dotted lookup can never reach.
    #[error("'{key}': segment contains '.' and is unreachable by key lookup")]
    UnreachableKey { key: String },

    /// A plural form that opens like a tag but does not parse as one.
    #[error("'{key}': malformed plural tag in form '{form}'")]
    MalformedPluralTag { key: String, form: String },

    /// A range tag whose start is past its end.
    #[error("'{key}': range in form '{form}' matches no count")]
    EmptyRange { key: String, form: String },

    /// A second `{N}` tag for a count already covered by an earlier form.
    #[error("'{key}': exact tag {{{count}}} is shadowed by an earlier form")]
    DuplicateExactTag { key: String, count: i64 },
}

/// Check every entry of `dictionary`.
///
/// Segment warnings come first, followed by per-leaf warnings in key order.
pub fn lint_dictionary(dictionary: &Dictionary) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    lint_segments(dictionary, "", &mut warnings);
    for (key, entry) in dictionary.leaves() {
        match entry {
            Entry::Text(template) => lint_plural_forms(&key, template, &mut warnings),
            Entry::Other(_) => warnings.push(LintWarning::NonStringLeaf { key }),
            Entry::Nested(_) => {}
        }
    }
    warnings
}

fn lint_segments(dictionary: &Dictionary, prefix: &str, warnings: &mut Vec<LintWarning>) {
    for (segment, entry) in dictionary {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{prefix}.{segment}")
        };
        if segment.contains('.') {
            warnings.push(LintWarning::UnreachableKey { key: path.clone() });
        }
        if let Entry::Nested(nested) = entry {
            lint_segments(nested, &path, warnings);
        }
    }
}

fn lint_plural_forms(key: &str, template: &str, warnings: &mut Vec<LintWarning>) {
    let mut exact_counts = HashSet::new();
    for form in template.split('|') {
        let parsed = parse_plural_form(form);
        match parsed.tag {
            None if form.trim_start().starts_with(['{', '[']) => {
                warnings.push(LintWarning::MalformedPluralTag {
                    key: key.to_string(),
                    form: form.to_string(),
                });
            }
            None => {}
            Some(FormTag::Exact(count)) => {
                if !exact_counts.insert(count) {
                    warnings.push(LintWarning::DuplicateExactTag {
                        key: key.to_string(),
                        count,
                    });
                }
            }
            Some(FormTag::Range { start, end }) => {
                if end.is_some_and(|end| start > end) {
                    warnings.push(LintWarning::EmptyRange {
                        key: key.to_string(),
                        form: form.to_string(),
                    });
                }
            }
        }
    }
}
