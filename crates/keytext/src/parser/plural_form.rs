//! Plural form tag parser using winnow.
//!
//! A plural form may start with a selector tag:
//! - `{N}` matches exactly `N`
//! - `[N-M]` or `[N,M]` matches `N..=M`; `M` may be `*` for no upper bound

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// The selector tag at the start of a plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTag {
    /// `{N}`: selected when the count equals `N`.
    Exact(i64),
    /// `[N-M]`: selected when `start <= count <= end`; `end: None` is `*`.
    Range { start: i64, end: Option<i64> },
}

impl FormTag {
    /// Whether this tag selects `count`.
    pub fn matches(&self, count: i64) -> bool {
        match *self {
            FormTag::Exact(n) => count == n,
            FormTag::Range { start, end } => count >= start && end.is_none_or(|end| count <= end),
        }
    }
}

/// One `|`-separated candidate of a plural template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForm<'a> {
    /// The leading selector tag, if any.
    pub tag: Option<FormTag>,
    /// The form text after the tag, or the whole form when untagged.
    pub text: &'a str,
}

/// Parse the optional selector tag at the start of a plural form.
///
/// # Examples
///
/// ```
/// use keytext::parser::{FormTag, parse_plural_form};
///
/// let form = parse_plural_form("[2,*] :count items");
/// assert_eq!(form.tag, Some(FormTag::Range { start: 2, end: None }));
/// assert_eq!(form.text, ":count items");
///
/// let form = parse_plural_form("items");
/// assert_eq!(form.tag, None);
/// assert_eq!(form.text, "items");
/// ```
pub fn parse_plural_form(form: &str) -> PluralForm<'_> {
    let mut input = form;
    match alt((exact_tag, range_tag)).parse_next(&mut input) {
        Ok(tag) => PluralForm {
            tag: Some(tag),
            text: input,
        },
        Err(_) => PluralForm {
            tag: None,
            text: form,
        },
    }
}

/// Parse `{N}` followed by at most one whitespace character.
fn exact_tag(input: &mut &str) -> ModalResult<FormTag> {
    let _ = ws(input)?;
    let n = delimited('{', number, '}').parse_next(input)?;
    let _ = opt(one_of(char::is_whitespace)).parse_next(input)?;
    Ok(FormTag::Exact(n))
}

/// Parse `[N-M]` / `[N,M]` followed by any whitespace.
fn range_tag(input: &mut &str) -> ModalResult<FormTag> {
    let _ = ws(input)?;
    let (start, end) = delimited(
        ('[', ws),
        (
            number,
            preceded((ws, one_of(['-', ',']), ws), range_end),
        ),
        (ws, ']'),
    )
    .parse_next(input)?;
    let _ = ws(input)?;
    Ok(FormTag::Range { start, end })
}

/// Parse the upper bound of a range: digits, or `*` for unbounded.
fn range_end(input: &mut &str) -> ModalResult<Option<i64>> {
    alt(('*'.value(None), number.map(Some))).parse_next(input)
}

/// Parse a non-negative integer that fits in `i64`.
fn number(input: &mut &str) -> ModalResult<i64> {
    digit1
        .try_map(|digits: &str| digits.parse::<i64>())
        .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_tag_consumes_single_space() {
        let form = parse_plural_form("{1}  one");
        assert_eq!(form.tag, Some(FormTag::Exact(1)));
        assert_eq!(form.text, " one");
    }

    #[test]
    fn range_allows_inner_whitespace() {
        let form = parse_plural_form(" [ 2 - 10 ]  few");
        assert_eq!(form.tag, Some(FormTag::Range { start: 2, end: Some(10) }));
        assert_eq!(form.text, "few");
    }

    #[test]
    fn range_without_end_is_untagged() {
        let form = parse_plural_form("[2-] few");
        assert_eq!(form.tag, None);
        assert_eq!(form.text, "[2-] few");
    }

    #[test]
    fn unbounded_range_matches_large_counts() {
        let tag = FormTag::Range {
            start: 11,
            end: None,
        };
        assert!(tag.matches(11));
        assert!(tag.matches(i64::MAX));
        assert!(!tag.matches(10));
    }
}
