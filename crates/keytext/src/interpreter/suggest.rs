//! "Did you mean" suggestions for unknown keys.

use strsim::levenshtein;

const MAX_DISTANCE: usize = 2;
const MAX_SUGGESTIONS: usize = 3;

/// Compute up to three keys from `available` within edit distance 2 of
/// `key`, nearest first. Ties keep the order of `available`.
///
/// # Examples
///
/// ```
/// use keytext::compute_suggestions;
///
/// let available = vec!["cart.items".to_string(), "cart.title".to_string()];
/// assert_eq!(compute_suggestions("cart.itens", &available), vec!["cart.items"]);
/// assert!(compute_suggestions("checkout", &available).is_empty());
/// ```
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= MAX_DISTANCE)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
