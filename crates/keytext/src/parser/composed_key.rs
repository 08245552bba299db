//! Composed key parser using winnow.
//!
//! A composed key embeds a plural count and/or inline replacements in the
//! key text itself: `BASE [ '[' DIGITS ']' ]? [ '{' PAIRS '}' ]?`.

use winnow::ascii::digit1;
use winnow::combinator::{delimited, eof, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;

use crate::types::{Replacements, Value};

/// A key split into its base key, optional count and optional inline
/// replacements.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedKey {
    pub base_key: String,
    pub count: Option<i64>,
    pub inline_replace: Option<Replacements>,
}

impl ComposedKey {
    /// A key with no composed clauses.
    fn plain(key: &str) -> Self {
        Self {
            base_key: key.to_string(),
            count: None,
            inline_replace: None,
        }
    }
}

/// Whether `key` contains any composed-key syntax.
pub fn is_composed_key(key: &str) -> bool {
    key.contains(['[', '{'])
}

/// Parse a composed key.
///
/// The base key is the shortest non-empty prefix after which the rest of the
/// input matches the optional count and replacement clauses. If no prefix
/// works, the whole input is the base key.
///
/// # Examples
///
/// ```
/// use keytext::parser::parse_composed_key;
///
/// let key = parse_composed_key("cart.items[3]{name:Bob}");
/// assert_eq!(key.base_key, "cart.items");
/// assert_eq!(key.count, Some(3));
/// assert_eq!(key.inline_replace.unwrap().get("name").unwrap().to_string(), "Bob");
///
/// let plain = parse_composed_key("cart[items");
/// assert_eq!(plain.base_key, "cart[items");
/// assert_eq!(plain.count, None);
/// ```
pub fn parse_composed_key(input: &str) -> ComposedKey {
    // Both clauses open with an ASCII bracket, so only those byte offsets
    // (and the end of input) can start the remainder.
    let split_points = input
        .match_indices(['[', '{'])
        .map(|(index, _)| index)
        .chain([input.len()])
        .filter(|&index| index > 0);

    for split in split_points {
        let (base, mut rest) = input.split_at(split);
        if let Ok((count, pairs)) = clauses(&mut rest) {
            return ComposedKey {
                base_key: base.to_string(),
                count,
                inline_replace: pairs.map(parse_pairs),
            };
        }
    }

    ComposedKey::plain(input)
}

/// Parse the optional `[count]` and `{pairs}` clauses through end of input.
fn clauses<'i>(input: &mut &'i str) -> ModalResult<(Option<i64>, Option<&'i str>)> {
    let count = opt(count_clause).parse_next(input)?;
    let pairs = opt(replace_clause).parse_next(input)?;
    eof.parse_next(input)?;
    Ok((count, pairs))
}

/// Parse `[DIGITS]`. A count that does not fit in `i64` does not match.
fn count_clause(input: &mut &str) -> ModalResult<i64> {
    delimited(
        '[',
        digit1.try_map(|digits: &str| digits.parse::<i64>()),
        ']',
    )
    .parse_next(input)
}

/// Parse `{BODY}` where the body runs to the final `}` of the input.
fn replace_clause<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let full: &'i str = *input;
    let body = full
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|body| !body.is_empty())
        .ok_or_else(|| ErrMode::Backtrack(ContextError::new()))?;
    *input = &full[full.len()..];
    Ok(body)
}

/// Split `name:value, name:value` into replacements.
///
/// Values stay strings. Pairs without a `:` or with an empty name are
/// skipped.
fn parse_pairs(body: &str) -> Replacements {
    body.split(',')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name, Value::from(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brace_body_extends_to_final_brace() {
        let key = parse_composed_key("a{x:{y}}");
        assert_eq!(key.base_key, "a");
        let pairs = key.inline_replace.unwrap();
        assert_eq!(pairs.get("x"), Some(&Value::from("{y}")));
    }

    #[test]
    fn shortest_base_that_matches_wins() {
        let key = parse_composed_key("a[1][2]");
        assert_eq!(key.base_key, "a[1]");
        assert_eq!(key.count, Some(2));
    }

    #[test]
    fn long_run_of_open_braces_is_plain() {
        let key = "{".repeat(20_000);
        assert_eq!(parse_composed_key(&key), ComposedKey::plain(&key));
    }

    #[test]
    fn empty_brace_clause_does_not_match() {
        let key = parse_composed_key("a{}");
        assert_eq!(key, ComposedKey::plain("a{}"));
    }
}
