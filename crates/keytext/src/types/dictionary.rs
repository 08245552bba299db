use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A nested catalog of translation templates.
///
/// Each segment maps either to a text leaf or to a nested dictionary. Leaves
/// of any other JSON shape are kept as [`Entry::Other`] so a catalog
/// deserializes without loss, but they never resolve to a translation.
///
/// # Example
///
/// ```
/// use keytext::{Dictionary, Entry};
///
/// let dictionary: Dictionary = serde_json::from_str(
///     r#"{ "cart": { "title": "Your cart", "items": "one item|:count items" } }"#,
/// ).unwrap();
///
/// assert!(matches!(dictionary.get("cart"), Some(Entry::Nested(_))));
/// assert_eq!(dictionary.leaf_keys(), vec!["cart.title", "cart.items"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: IndexMap<String, Entry>,
}

/// A single value in a [`Dictionary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A template string.
    Text(String),
    /// A nested level of the catalog.
    Nested(Dictionary),
    /// Any other value (number, boolean, array, null).
    Other(JsonValue),
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry for a single segment (no dotted path handling).
    pub fn get(&self, segment: &str) -> Option<&Entry> {
        self.entries.get(segment)
    }

    /// Insert an entry under a single segment, returning the previous one.
    pub fn insert(&mut self, segment: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.entries.insert(segment.into(), entry.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the top-level entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Entry> {
        self.entries.iter()
    }

    /// Every non-nested leaf with its dotted path, depth first.
    pub fn leaves(&self) -> Vec<(String, &Entry)> {
        let mut leaves = Vec::new();
        collect_leaves(self, "", &mut leaves);
        leaves
    }

    /// Dotted paths of all text leaves, i.e. every key that resolves.
    pub fn leaf_keys(&self) -> Vec<String> {
        self.leaves()
            .into_iter()
            .filter(|(_, entry)| matches!(entry, Entry::Text(_)))
            .map(|(key, _)| key)
            .collect()
    }
}

fn collect_leaves<'a>(dictionary: &'a Dictionary, prefix: &str, out: &mut Vec<(String, &'a Entry)>) {
    for (segment, entry) in dictionary {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{prefix}.{segment}")
        };
        match entry {
            Entry::Nested(nested) => collect_leaves(nested, &path, out),
            Entry::Text(_) | Entry::Other(_) => out.push((path, entry)),
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a Entry);
    type IntoIter = Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, E: Into<Entry>> FromIterator<(K, E)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (K, E)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(segment, entry)| (segment.into(), entry.into()))
                .collect(),
        }
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Entry::Text(text)
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::Text(text.to_string())
    }
}

impl From<Dictionary> for Entry {
    fn from(nested: Dictionary) -> Self {
        Entry::Nested(nested)
    }
}
