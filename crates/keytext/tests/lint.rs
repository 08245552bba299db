//! Tests for dictionary lint checks.

use insta::assert_snapshot;
use keytext::{Dictionary, LintWarning, lint_dictionary};
use serde_json::json;

fn dictionary(value: serde_json::Value) -> Dictionary {
    serde_json::from_value(value).unwrap()
}

#[test]
fn clean_dictionary_has_no_warnings() {
    let d = dictionary(json!({
        "hello": "Hello, :name",
        "cart": { "items": "{0} empty|{1} one|[2,*] :count items", "plain": "one|many" }
    }));
    assert!(lint_dictionary(&d).is_empty());
}

#[test]
fn non_string_leaf() {
    let d = dictionary(json!({ "limits": { "max": 10 } }));
    assert_eq!(
        lint_dictionary(&d),
        vec![LintWarning::NonStringLeaf {
            key: "limits.max".into()
        }]
    );
}

#[test]
fn dotted_segment_is_unreachable() {
    let d = dictionary(json!({ "menu": { "file.open": "Open" } }));
    assert_eq!(
        lint_dictionary(&d),
        vec![LintWarning::UnreachableKey {
            key: "menu.file.open".into()
        }]
    );
}

#[test]
fn malformed_plural_tags() {
    let d = dictionary(json!({ "n": "{zero} none|[2-] few|many" }));
    assert_eq!(
        lint_dictionary(&d),
        vec![
            LintWarning::MalformedPluralTag {
                key: "n".into(),
                form: "{zero} none".into()
            },
            LintWarning::MalformedPluralTag {
                key: "n".into(),
                form: "[2-] few".into()
            },
        ]
    );
}

#[test]
fn empty_range() {
    let d = dictionary(json!({ "n": "[10-2] odd|other" }));
    assert_eq!(
        lint_dictionary(&d),
        vec![LintWarning::EmptyRange {
            key: "n".into(),
            form: "[10-2] odd".into()
        }]
    );
}

#[test]
fn duplicate_exact_tag() {
    let d = dictionary(json!({ "n": "{1} one|{1} uno|other" }));
    assert_eq!(
        lint_dictionary(&d),
        vec![LintWarning::DuplicateExactTag {
            key: "n".into(),
            count: 1
        }]
    );
}

#[test]
fn warning_display() {
    let warning = LintWarning::DuplicateExactTag {
        key: "cart.items".into(),
        count: 0,
    };
    assert_snapshot!(warning.to_string(), @"'cart.items': exact tag {0} is shadowed by an earlier form");

    let warning = LintWarning::NonStringLeaf {
        key: "limits.max".into(),
    };
    assert_snapshot!(warning.to_string(), @"'limits.max': value is not a string and will never resolve");
}
