//! The translate entry points.
//!
//! [`Translator`] resolves keys against its [`DictionarySource`], falling
//! back to the key text whenever a translation is missing. No operation here
//! fails; the worst case output is the readable key itself.

use std::sync::Arc;

use bon::Builder;
use tracing::{debug, trace};

use crate::interpreter::interpolate::interpolate;
use crate::interpreter::lookup::lookup;
use crate::interpreter::plural::select_plural_form;
use crate::interpreter::source::DictionarySource;
use crate::interpreter::suggest::compute_suggestions;
use crate::parser::{is_composed_key, parse_composed_key};
use crate::types::{Dictionary, Replace, Replacements};

/// Looks up, pluralizes and interpolates translation strings.
///
/// # Example
///
/// ```
/// use keytext::{Dictionary, Translator, replacements};
///
/// let dictionary: Dictionary = serde_json::from_str(r#"{
///     "greeting": "Hello, :name!",
///     "cart": { "items": "{0} empty|{1} one item|[2,*] :count items" }
/// }"#).unwrap();
///
/// let translator = Translator::builder().dictionary(dictionary).build();
///
/// assert_eq!(translator.translate_with("greeting", "Ada"), "Hello, Ada!");
/// assert_eq!(translator.translate_plural("cart.items", 0), "empty");
/// assert_eq!(translator.translate("cart.items[3]"), "3 items");
/// assert_eq!(translator.translate("missing.key"), "missing.key");
/// ```
#[derive(Builder, Clone, Debug)]
pub struct Translator {
    /// Where dictionaries come from. Defaults to an empty static dictionary.
    #[builder(default, into)]
    dictionary: DictionarySource,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a translator over a dictionary or provider.
    pub fn new(dictionary: impl Into<DictionarySource>) -> Self {
        Translator::builder().dictionary(dictionary).build()
    }

    /// Swap the dictionary source.
    pub fn set_dictionary(&mut self, dictionary: impl Into<DictionarySource>) {
        self.dictionary = dictionary.into();
    }

    /// The dictionary a translate call made now would use.
    pub fn dictionary(&self) -> Arc<Dictionary> {
        self.dictionary.current()
    }

    /// Translate `key` without replacements.
    ///
    /// Keys may carry composed syntax such as `cart.items[3]` or
    /// `greeting{name:Ada}`, which is unwrapped when `key` itself has no
    /// translation.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, Replace::None)
    }

    /// Translate `key`, substituting `replace` into the result.
    ///
    /// When `key` has no translation but replacements were supplied, they are
    /// substituted into the key text itself.
    pub fn translate_with(&self, key: &str, replace: impl Into<Replace>) -> String {
        let dictionary = self.dictionary();
        let replacements = replace.into().normalize();
        if let Some(resolved) = resolve_direct(&dictionary, key, replacements.as_ref()) {
            return resolved;
        }
        resolve_composed(&dictionary, key)
    }

    /// Translate the plural template at `key` for `count`.
    pub fn translate_plural(&self, key: &str, count: i64) -> String {
        self.translate_plural_with(key, count, Replace::None)
    }

    /// Translate the plural template at `key` for `count`, with replacements.
    ///
    /// `:count` and `:value` are bound to `count` unless `replace` overrides
    /// them.
    pub fn translate_plural_with(&self, key: &str, count: i64, replace: impl Into<Replace>) -> String {
        let dictionary = self.dictionary();
        resolve_plural(&dictionary, key, count, replace.into().normalize())
    }

    /// Keys of the current dictionary that look like a misspelling of `key`.
    pub fn suggestions(&self, key: &str) -> Vec<String> {
        compute_suggestions(key, &self.dictionary().leaf_keys())
    }
}

/// Resolve `key` as written. Returns `None` when there is neither a
/// translation nor replacements, leaving composed-key handling to the caller.
fn resolve_direct(
    dictionary: &Dictionary,
    key: &str,
    replacements: Option<&Replacements>,
) -> Option<String> {
    let template = lookup(dictionary, key);
    if template.is_none() && replacements.is_none() {
        return None;
    }
    if template.is_none() {
        debug!(key, "translation not found, interpolating into key");
    } else {
        trace!(key, "translation found");
    }
    Some(interpolate(template.unwrap_or(key), replacements))
}

/// Unwrap one level of composed-key syntax from an untranslated key.
fn resolve_composed(dictionary: &Dictionary, key: &str) -> String {
    if !is_composed_key(key) {
        debug!(key, "translation not found");
        return key.to_string();
    }

    let composed = parse_composed_key(key);
    if is_composed_key(&composed.base_key) {
        debug!(key, "composed key did not unwrap");
        return key.to_string();
    }

    debug!(key, base_key = %composed.base_key, count = ?composed.count, "unwrapping composed key");
    match (composed.count, composed.inline_replace) {
        (Some(count), inline) => resolve_plural(dictionary, &composed.base_key, count, inline),
        (None, Some(inline)) => resolve_direct(dictionary, &composed.base_key, Some(&inline))
            .unwrap_or(composed.base_key),
        (None, None) => composed.base_key,
    }
}

fn resolve_plural(
    dictionary: &Dictionary,
    key: &str,
    count: i64,
    replacements: Option<Replacements>,
) -> String {
    let Some(template) = lookup(dictionary, key) else {
        debug!(key, count, "plural translation not found");
        return key.to_string();
    };

    let forms: Vec<&str> = template.split('|').collect();
    let Some(form) = select_plural_form(count, &forms) else {
        debug!(key, count, "no plural form selected");
        return key.to_string();
    };

    let mut merged = Replacements::count_defaults(count);
    if let Some(replacements) = replacements {
        merged.merge(replacements);
    }
    trace!(key, count, "plural form selected");
    interpolate(form, Some(&merged))
}
