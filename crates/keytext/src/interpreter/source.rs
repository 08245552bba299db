//! Where a [`Translator`](super::Translator) gets its dictionary from.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::types::Dictionary;

type Provider = dyn Fn() -> Arc<Dictionary> + Send + Sync;

/// A dictionary, either fixed or produced on demand.
///
/// A provider is called once per translate call and its result is never
/// cached, so switching the locale behind it is visible on the next call.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, RwLock};
/// use keytext::{Dictionary, DictionarySource, Translator};
///
/// let english: Arc<Dictionary> =
///     Arc::new(serde_json::from_str(r#"{ "hello": "Hello" }"#).unwrap());
/// let german: Arc<Dictionary> =
///     Arc::new(serde_json::from_str(r#"{ "hello": "Hallo" }"#).unwrap());
///
/// let active = Arc::new(RwLock::new(english));
/// let current = Arc::clone(&active);
/// let translator = Translator::new(DictionarySource::provider(move || {
///     Arc::clone(&current.read().unwrap())
/// }));
///
/// assert_eq!(translator.translate("hello"), "Hello");
/// *active.write().unwrap() = german;
/// assert_eq!(translator.translate("hello"), "Hallo");
/// ```
#[derive(Clone)]
pub enum DictionarySource {
    /// A fixed dictionary.
    Static(Arc<Dictionary>),
    /// A function re-evaluated on every call.
    Provider(Arc<Provider>),
}

impl DictionarySource {
    /// Wrap a function producing the current dictionary.
    pub fn provider(f: impl Fn() -> Arc<Dictionary> + Send + Sync + 'static) -> Self {
        DictionarySource::Provider(Arc::new(f))
    }

    /// The dictionary to use for one call.
    pub fn current(&self) -> Arc<Dictionary> {
        match self {
            DictionarySource::Static(dictionary) => Arc::clone(dictionary),
            DictionarySource::Provider(provider) => provider(),
        }
    }
}

impl Default for DictionarySource {
    fn default() -> Self {
        DictionarySource::Static(Arc::default())
    }
}

impl Debug for DictionarySource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DictionarySource::Static(dictionary) => {
                f.debug_tuple("Static").field(dictionary).finish()
            }
            DictionarySource::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

impl From<Dictionary> for DictionarySource {
    fn from(dictionary: Dictionary) -> Self {
        DictionarySource::Static(Arc::new(dictionary))
    }
}

impl From<Arc<Dictionary>> for DictionarySource {
    fn from(dictionary: Arc<Dictionary>) -> Self {
        DictionarySource::Static(dictionary)
    }
}
