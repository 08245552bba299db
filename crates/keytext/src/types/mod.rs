mod dictionary;
mod replace;
mod value;

pub use dictionary::{Dictionary, Entry};
pub use replace::{Replace, Replacements};
pub use value::Value;
