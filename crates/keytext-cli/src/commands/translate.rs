//! Implementation of the `keytext translate` command.

use std::path::PathBuf;

use keytext::{Replace, Replacements, Translator, Value};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::load_or_report;

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Dictionary file (.json)
    #[arg(long, env = "KEYTEXT_DICT")]
    pub dict: PathBuf,

    /// Key to resolve; may use composed syntax such as `cart.items[3]`
    #[arg(long, required = true)]
    pub key: String,

    /// Resolve as a plural with this count
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Replacements in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
pub struct TranslateResult {
    pub key: String,
    pub result: String,
    pub suggestions: Vec<String>,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((name.to_string(), value.to_string()))
}

/// Convert parameters to replacements; integers become numbers.
fn to_replace(params: Vec<(String, String)>) -> Replace {
    if params.is_empty() {
        return Replace::None;
    }
    let replacements: Replacements = params
        .into_iter()
        .map(|(name, value)| {
            let value = match value.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(value),
            };
            (name, value)
        })
        .collect();
    Replace::Mapping(replacements)
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> miette::Result<i32> {
    let translator = Translator::new(load_or_report(&args.dict)?);
    let replace = to_replace(args.params);

    let result = match args.count {
        Some(count) => translator.translate_plural_with(&args.key, count, replace),
        None => translator.translate_with(&args.key, replace),
    };

    let suggestions = if result == args.key {
        translator.suggestions(&args.key)
    } else {
        Vec::new()
    };

    if args.json {
        let output = TranslateResult {
            key: args.key,
            result,
            suggestions,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
        if !suggestions.is_empty() {
            eprintln!(
                "{} '{}' not found; did you mean: {}",
                "hint:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                args.key,
                suggestions.join(", ")
            );
        }
    }
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_val_splits_at_first_equals() {
        assert_eq!(
            parse_key_val("url=a=b"),
            Ok(("url".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_val("novalue").is_err());
    }

    #[test]
    fn numeric_params_become_numbers() {
        let replace = to_replace(vec![
            ("count".into(), "3".into()),
            ("name".into(), "Bob".into()),
        ]);
        let Replace::Mapping(values) = replace else {
            panic!("expected mapping");
        };
        assert_eq!(values.get("count"), Some(&Value::Number(3)));
        assert_eq!(values.get("name"), Some(&Value::from("Bob")));
    }

    #[test]
    fn no_params_means_no_replacements() {
        assert_eq!(to_replace(Vec::new()), Replace::None);
    }
}
