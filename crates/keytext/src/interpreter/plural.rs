//! Plural form selection by count.
//!
//! Forms are chosen by rule precedence, each rule scanning the whole list:
//!
//! 1. an exact `{N}` tag equal to the count
//! 2. a `[N-M]` range tag containing the count
//! 3. the positional default over the untagged forms (or over all forms
//!    when every form is tagged): the only form, or the first for a count
//!    of one and the second otherwise

use crate::parser::{FormTag, parse_plural_form};

/// Pick the form for `count` from the `|`-separated candidates.
///
/// Returns `None` only when `forms` is empty.
///
/// # Examples
///
/// ```
/// use keytext::interpreter::select_plural_form;
///
/// let forms = ["{0} none", "{1} one", "[2-10] few", "[11-*] many"];
/// assert_eq!(select_plural_form(0, &forms), Some("none"));
/// assert_eq!(select_plural_form(5, &forms), Some("few"));
/// assert_eq!(select_plural_form(99, &forms), Some("many"));
///
/// let forms = ["one item", "other items"];
/// assert_eq!(select_plural_form(1, &forms), Some("one item"));
/// assert_eq!(select_plural_form(7, &forms), Some("other items"));
/// ```
pub fn select_plural_form<'a>(count: i64, forms: &[&'a str]) -> Option<&'a str> {
    let parsed: Vec<_> = forms.iter().copied().map(parse_plural_form).collect();

    let tagged_match = |want_exact: bool| {
        parsed.iter().find_map(|form| {
            let tag = form.tag?;
            let is_exact = matches!(tag, FormTag::Exact(_));
            (is_exact == want_exact && tag.matches(count)).then_some(form.text)
        })
    };

    if let Some(text) = tagged_match(true).or_else(|| tagged_match(false)) {
        return Some(text);
    }

    // Tagged forms that did not match are not candidates for the default,
    // unless every form is tagged.
    let untagged: Vec<&'a str> = parsed
        .iter()
        .filter(|form| form.tag.is_none())
        .map(|form| form.text)
        .collect();
    let candidates = if untagged.is_empty() {
        forms
    } else {
        untagged.as_slice()
    };

    match candidates {
        [] => None,
        [only] => Some(*only),
        [first, second, ..] => Some(if count == 1 { *first } else { *second }),
    }
}
