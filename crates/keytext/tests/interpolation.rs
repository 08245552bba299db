//! Tests for placeholder interpolation.

use keytext::interpreter::interpolate;
use keytext::{Replacements, Value, replacements};

#[test]
fn substitutes_named_tokens() {
    let values = replacements! { "count" => 3, "name" => "Bob" };
    assert_eq!(
        interpolate(":count items for :name", Some(&values)),
        "3 items for Bob"
    );
}

#[test]
fn replaces_every_occurrence() {
    let values = replacements! { "x" => "ab" };
    assert_eq!(interpolate(":x-:x-:x", Some(&values)), "ab-ab-ab");
}

#[test]
fn absent_or_empty_replacements_are_a_no_op() {
    assert_eq!(interpolate("Hello :name", None), "Hello :name");
    assert_eq!(
        interpolate("Hello :name", Some(&Replacements::new())),
        "Hello :name"
    );
}

#[test]
fn unknown_tokens_are_left_alone() {
    let values = replacements! { "name" => "Bob" };
    assert_eq!(interpolate(":greeting :name", Some(&values)), ":greeting Bob");
}

#[test]
fn inserted_text_is_not_rescanned() {
    let values = replacements! { "a" => ":b", "b" => "X" };
    assert_eq!(interpolate(":a :b", Some(&values)), ":b X");
    assert_eq!(interpolate(":b :a", Some(&values)), "X :b");
}

#[test]
fn inserted_text_is_not_rescanned_for_later_prefix_tokens() {
    let values = replacements! { "first" => ":first", "f" => "!" };
    assert_eq!(interpolate(":first", Some(&values)), ":first");
}

#[test]
fn iteration_order_decides_overlapping_names() {
    let short_first = replacements! { "c" => "C", "count" => 5 };
    assert_eq!(interpolate(":count", Some(&short_first)), "Count");

    let long_first = replacements! { "count" => 5, "c" => "C" };
    assert_eq!(interpolate(":count", Some(&long_first)), "5");
}

#[test]
fn numeric_values_render_like_scalars() {
    let values = replacements! { "whole" => 2.0, "part" => 2.5, "n" => -4 };
    assert_eq!(interpolate(":whole :part :n", Some(&values)), "2 2.5 -4");
}

#[test]
fn empty_names_are_ignored() {
    let mut values = Replacements::new();
    values.insert("", "boom");
    values.insert("x", Value::from("y"));
    assert_eq!(interpolate("a:b :x", Some(&values)), "a:b y");
}

#[test]
fn adjacent_tokens() {
    let values = replacements! { "a" => "1", "b" => "2" };
    assert_eq!(interpolate(":a:b", Some(&values)), "12");
}
