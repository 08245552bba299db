//! Dotted-path lookup into a nested dictionary.

use crate::types::{Dictionary, Entry};

/// Resolve a dotted key path to a template string.
///
/// Returns `None` when any segment is missing, when an intermediate value is
/// not a nested dictionary, or when the final value is not text. The empty
/// key resolves to the empty string.
///
/// # Examples
///
/// ```
/// use keytext::{Dictionary, interpreter::lookup};
///
/// let dictionary: Dictionary =
///     serde_json::from_str(r#"{ "a": { "b": { "c": "X" } } }"#).unwrap();
///
/// assert_eq!(lookup(&dictionary, "a.b.c"), Some("X"));
/// assert_eq!(lookup(&dictionary, "a.b"), None);
/// assert_eq!(lookup(&dictionary, "a.x.c"), None);
/// assert_eq!(lookup(&dictionary, ""), Some(""));
/// ```
pub fn lookup<'d>(dictionary: &'d Dictionary, key: &str) -> Option<&'d str> {
    if key.is_empty() {
        return Some("");
    }

    let mut segments = key.split('.');
    let mut current = dictionary.get(segments.next()?)?;
    for segment in segments {
        let Entry::Nested(nested) = current else {
            return None;
        };
        current = nested.get(segment)?;
    }

    match current {
        Entry::Text(text) => Some(text),
        Entry::Nested(_) | Entry::Other(_) => None,
    }
}
