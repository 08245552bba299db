//! `:name` placeholder substitution.

use crate::types::Replacements;

/// A run of output text, tagged with whether it came from the template.
///
/// Only template text is scanned for placeholders; inserted values are
/// never rescanned.
enum Piece<'t> {
    Template(&'t str),
    Inserted(String),
}

/// Replace every `:name` token in `template` with its value.
///
/// Entries are applied in the set's iteration order, each one replacing all
/// of its occurrences before the next. Text inserted for one name is not
/// searched for another name's token. Entries with an empty name are
/// ignored.
///
/// # Examples
///
/// ```
/// use keytext::{interpreter::interpolate, replacements};
///
/// let values = replacements! { "count" => 3, "name" => "Bob" };
/// assert_eq!(interpolate(":count items for :name", Some(&values)), "3 items for Bob");
///
/// let values = replacements! { "a" => ":b", "b" => "X" };
/// assert_eq!(interpolate(":a :b", Some(&values)), ":b X");
/// ```
pub fn interpolate(template: &str, replacements: Option<&Replacements>) -> String {
    let Some(replacements) = replacements.filter(|r| !r.is_empty()) else {
        return template.to_string();
    };

    let mut pieces = vec![Piece::Template(template)];
    for (name, value) in replacements {
        if name.is_empty() {
            continue;
        }
        let token = format!(":{name}");
        let value = value.to_string();
        pieces = pieces
            .into_iter()
            .flat_map(|piece| split_piece(piece, &token, &value))
            .collect();
    }

    pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Template(text) => text.to_string(),
            Piece::Inserted(text) => text,
        })
        .collect()
}

/// Split one template piece around `token`, inserting `value` between parts.
fn split_piece<'t>(piece: Piece<'t>, token: &str, value: &str) -> Vec<Piece<'t>> {
    let Piece::Template(text) = piece else {
        return vec![piece];
    };
    if !text.contains(token) {
        return vec![Piece::Template(text)];
    }

    let mut out = Vec::new();
    for (index, part) in text.split(token).enumerate() {
        if index > 0 {
            out.push(Piece::Inserted(value.to_string()));
        }
        if !part.is_empty() {
            out.push(Piece::Template(part));
        }
    }
    out
}
