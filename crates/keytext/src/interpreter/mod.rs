//! The keytext resolution engine.
//!
//! This module composes dictionary lookup, plural form selection and
//! placeholder interpolation into the two public translate operations on
//! [`Translator`].

mod interpolate;
mod lint;
mod lookup;
mod plural;
mod source;
mod suggest;
mod translator;

pub use interpolate::interpolate;
pub use lint::{LintWarning, lint_dictionary};
pub use lookup::lookup;
pub use plural::select_plural_form;
pub use source::DictionarySource;
pub use suggest::compute_suggestions;
pub use translator::Translator;
