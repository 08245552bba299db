pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    DictionarySource, LintWarning, Translator, compute_suggestions, lint_dictionary,
};
pub use types::{Dictionary, Entry, Replace, Replacements, Value};

/// Creates a [`Replacements`] set from `name => value` pairs, in order.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings
/// can be mixed.
///
/// # Example
///
/// ```
/// use keytext::{replacements, Value};
///
/// let r = replacements! { "count" => 3, "name" => "Alice" };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r.get("count"), Some(&Value::Number(3)));
/// assert_eq!(r.get("name").and_then(Value::as_string), Some("Alice"));
/// ```
#[macro_export]
macro_rules! replacements {
    {} => {
        $crate::Replacements::new()
    };
    { $($name:expr => $value:expr),+ $(,)? } => {
        {
            let mut values = $crate::Replacements::new();
            $(
                values.insert($name, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            values
        }
    };
}
