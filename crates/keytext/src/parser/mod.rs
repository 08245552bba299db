//! Parsers for the two small grammars embedded in keys and templates.
//!
//! - Composed keys: `cart.items[3]{name:Bob}`
//! - Plural form tags: `{0} none`, `[2-10] few`, `[11,*] many`
//!
//! Neither parser fails: input that does not match the grammar is returned
//! as plain text.

mod composed_key;
mod plural_form;

pub use composed_key::{ComposedKey, is_composed_key, parse_composed_key};
pub use plural_form::{FormTag, PluralForm, parse_plural_form};
