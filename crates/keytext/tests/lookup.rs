//! Tests for dotted-path dictionary lookup.

use keytext::interpreter::lookup;
use keytext::{Dictionary, Entry};
use serde_json::json;

fn dictionary(value: serde_json::Value) -> Dictionary {
    serde_json::from_value(value).unwrap()
}

#[test]
fn nested_path_resolves_to_leaf() {
    let d = dictionary(json!({ "a": { "b": { "c": "X" } } }));
    assert_eq!(lookup(&d, "a.b.c"), Some("X"));
}

#[test]
fn top_level_key_resolves() {
    let d = dictionary(json!({ "hello": "Hello" }));
    assert_eq!(lookup(&d, "hello"), Some("Hello"));
}

#[test]
fn missing_segment_is_not_found() {
    let d = dictionary(json!({ "a": { "b": "X" } }));
    assert_eq!(lookup(&d, "a.c"), None);
    assert_eq!(lookup(&d, "z"), None);
}

#[test]
fn path_through_leaf_is_not_found() {
    let d = dictionary(json!({ "a": { "b": "X" } }));
    assert_eq!(lookup(&d, "a.b.c"), None);
}

#[test]
fn subtree_is_not_returned() {
    let d = dictionary(json!({ "a": { "b": "X" } }));
    assert_eq!(lookup(&d, "a"), None);
}

#[test]
fn non_string_leaves_are_not_found() {
    let d = dictionary(json!({ "n": 5, "b": true, "list": ["x"], "nothing": null }));
    assert_eq!(lookup(&d, "n"), None);
    assert_eq!(lookup(&d, "b"), None);
    assert_eq!(lookup(&d, "list"), None);
    assert_eq!(lookup(&d, "nothing"), None);
    assert!(matches!(d.get("n"), Some(Entry::Other(_))));
}

#[test]
fn empty_key_resolves_to_empty_string() {
    let d = dictionary(json!({ "a": "X" }));
    assert_eq!(lookup(&d, ""), Some(""));
}

#[test]
fn empty_segment_only_matches_empty_named_entry() {
    let d = dictionary(json!({ "a": { "": "blank" } }));
    assert_eq!(lookup(&d, "a."), Some("blank"));
    assert_eq!(lookup(&d, ".a"), None);
}

#[test]
fn lookup_leaves_dictionary_unchanged() {
    let d = dictionary(json!({ "a": { "b": "X" } }));
    let before = d.clone();
    let _ = lookup(&d, "a.b");
    let _ = lookup(&d, "a.missing.deeper");
    assert_eq!(d, before);
}

#[test]
fn built_dictionary_matches_deserialized_one() {
    let mut inner = Dictionary::new();
    inner.insert("b", "X");
    let mut built = Dictionary::new();
    built.insert("a", inner);

    assert_eq!(built, dictionary(json!({ "a": { "b": "X" } })));
    assert_eq!(lookup(&built, "a.b"), Some("X"));
}

#[test]
fn leaf_keys_lists_text_leaves_in_order() {
    let d = dictionary(json!({
        "b": "1",
        "a": { "y": "2", "x": 3, "z": { "w": "4" } }
    }));
    assert_eq!(d.leaf_keys(), vec!["b", "a.y", "a.z.w"]);
    assert_eq!(d.leaves().len(), 4);
}
