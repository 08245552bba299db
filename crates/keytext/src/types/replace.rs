use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::Value;

/// Named placeholder values, kept in insertion order.
///
/// Interpolation substitutes entries in this order, so a name that is a
/// prefix of another (`:c` and `:count`) behaves predictably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Replacements {
    values: IndexMap<String, Value>,
}

impl Replacements {
    /// Create an empty replacement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The defaults applied to every plural resolution: `count` and `value`
    /// both bound to `count`.
    pub fn count_defaults(count: i64) -> Self {
        let mut defaults = Self::new();
        defaults.insert("count", count);
        defaults.insert("value", count);
        defaults
    }

    /// Insert a value, returning the previous one for this name.
    ///
    /// Replacing an existing name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Get the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Layer `other` on top of this set; its names win.
    pub fn merge(&mut self, other: Replacements) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a Replacements {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Replacements {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// The replacement argument accepted by the translate operations.
///
/// Callers may pass a full mapping or a bare scalar shorthand. The shorthand
/// forms are expanded by [`Replace::normalize`]:
///
/// - a count `n` becomes `{count: n, value: n}`
/// - a text `s` becomes `{value: s, name: s}`
///
/// # Example
///
/// ```
/// use keytext::{Replace, Value};
///
/// let normalized = Replace::from(4).normalize().unwrap();
/// assert_eq!(normalized.get("count"), Some(&Value::Number(4)));
/// assert_eq!(normalized.get("value"), Some(&Value::Number(4)));
///
/// assert!(Replace::None.normalize().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Replace {
    Mapping(Replacements),
    Count(i64),
    Text(String),
    #[default]
    None,
}

impl Replace {
    /// Expand shorthand forms into a canonical mapping.
    ///
    /// Returns `None` when no replacements were supplied.
    pub fn normalize(self) -> Option<Replacements> {
        match self {
            Replace::Mapping(values) => Some(values),
            Replace::Count(n) => Some(Replacements::count_defaults(n)),
            Replace::Text(s) => {
                let mut values = Replacements::new();
                values.insert("value", s.clone());
                values.insert("name", s);
                Some(values)
            }
            Replace::None => None,
        }
    }

    /// Interpret an arbitrary JSON value as a replacement argument.
    ///
    /// Integers become [`Replace::Count`], strings [`Replace::Text`], objects
    /// a mapping of their scalar members. Fractional numbers become a
    /// `{count, value}` mapping. Anything else is treated as absent.
    pub fn from_json(value: &JsonValue) -> Replace {
        match value {
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Replace::Count(i),
                None => match n.as_f64() {
                    Some(f) => Replace::Mapping([("count", f), ("value", f)].into_iter().collect()),
                    None => Replace::None,
                },
            },
            JsonValue::String(s) => Replace::Text(s.clone()),
            JsonValue::Object(members) => Replace::Mapping(
                members
                    .iter()
                    .filter_map(|(name, member)| json_scalar(member).map(|v| (name.as_str(), v)))
                    .collect(),
            ),
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Array(_) => Replace::None,
        }
    }
}

/// Convert a JSON scalar into a [`Value`], skipping compound members.
fn json_scalar(value: &JsonValue) -> Option<Value> {
    match value {
        JsonValue::Number(n) => n
            .as_i64()
            .map(Value::Number)
            .or_else(|| n.as_f64().map(Value::Float)),
        JsonValue::String(s) => Some(Value::String(s.clone())),
        JsonValue::Bool(b) => Some(Value::String(b.to_string())),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

impl From<Replacements> for Replace {
    fn from(values: Replacements) -> Self {
        Replace::Mapping(values)
    }
}

impl From<i32> for Replace {
    fn from(n: i32) -> Self {
        Replace::Count(n.into())
    }
}

impl From<i64> for Replace {
    fn from(n: i64) -> Self {
        Replace::Count(n)
    }
}

impl From<u32> for Replace {
    fn from(n: u32) -> Self {
        Replace::Count(n.into())
    }
}

impl From<usize> for Replace {
    fn from(n: usize) -> Self {
        Replace::Count(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Replace {
    fn from(s: &str) -> Self {
        Replace::Text(s.to_string())
    }
}

impl From<String> for Replace {
    fn from(s: String) -> Self {
        Replace::Text(s)
    }
}

impl<T: Into<Replace>> From<Option<T>> for Replace {
    fn from(value: Option<T>) -> Self {
        value.map_or(Replace::None, Into::into)
    }
}
