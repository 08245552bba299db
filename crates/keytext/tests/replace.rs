//! Tests for replacement argument normalization.

use keytext::{Replace, Replacements, Value, replacements};
use serde_json::json;

#[test]
fn mapping_is_kept_as_is() {
    let values = replacements! { "a" => 1, "b" => "two" };
    assert_eq!(Replace::from(values.clone()).normalize(), Some(values));
}

#[test]
fn count_shorthand() {
    assert_eq!(
        Replace::from(3).normalize(),
        Some(replacements! { "count" => 3, "value" => 3 })
    );
}

#[test]
fn zero_count_is_still_supplied() {
    assert_eq!(
        Replace::Count(0).normalize(),
        Some(replacements! { "count" => 0, "value" => 0 })
    );
}

#[test]
fn text_shorthand() {
    assert_eq!(
        Replace::from("Ada").normalize(),
        Some(replacements! { "value" => "Ada", "name" => "Ada" })
    );
}

#[test]
fn none_is_absent() {
    assert_eq!(Replace::None.normalize(), None);
    assert_eq!(Replace::default(), Replace::None);
    assert_eq!(Replace::from(None::<i64>), Replace::None);
}

#[test]
fn from_json_scalars() {
    assert_eq!(Replace::from_json(&json!(5)), Replace::Count(5));
    assert_eq!(Replace::from_json(&json!("x")), Replace::Text("x".into()));
    assert_eq!(
        Replace::from_json(&json!(1.5)).normalize(),
        Some(replacements! { "count" => 1.5, "value" => 1.5 })
    );
}

#[test]
fn from_json_unrecognized_shapes_are_absent() {
    assert_eq!(Replace::from_json(&json!(null)), Replace::None);
    assert_eq!(Replace::from_json(&json!(true)), Replace::None);
    assert_eq!(Replace::from_json(&json!([1, 2])), Replace::None);
}

#[test]
fn from_json_object_keeps_scalar_members_in_order() {
    let replace = Replace::from_json(&json!({
        "name": "Bob",
        "count": 2,
        "nested": { "x": 1 },
        "ratio": 0.5,
        "flag": false
    }));
    let Replace::Mapping(values) = replace else {
        panic!("expected mapping");
    };
    let names: Vec<_> = values.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["name", "count", "ratio", "flag"]);
    assert_eq!(values.get("ratio"), Some(&Value::Float(0.5)));
    assert_eq!(values.get("flag"), Some(&Value::from("false")));
}

#[test]
fn merge_overrides_in_place() {
    let mut values = Replacements::count_defaults(2);
    values.merge(replacements! { "value" => "two", "extra" => "e" });
    let entries: Vec<_> = values
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    assert_eq!(entries, vec!["count=2", "value=two", "extra=e"]);
}

#[test]
fn value_accessors() {
    assert_eq!(Value::from(3).as_number(), Some(3));
    assert_eq!(Value::from(3).as_float(), Some(3.0));
    assert_eq!(Value::from(2.5).as_number(), None);
    assert_eq!(Value::from("s").as_string(), Some("s"));
    assert_eq!(Value::from("s").as_float(), None);
}

#[test]
fn oversized_usize_saturates() {
    assert_eq!(Value::from(usize::MAX), Value::Number(i64::MAX));
    assert_eq!(Replace::from(usize::MAX), Replace::Count(i64::MAX));
}
