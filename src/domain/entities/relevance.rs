use std::collections::HashSet;

/// Domain terms that earn a bonus when both texts mention them.
pub const RENEWABLE_KEYWORDS: [&str; 11] = [
    "solar",
    "wind",
    "biogas",
    "renewable",
    "energy",
    "subsidy",
    "scheme",
    "efficiency",
    "pump",
    "installation",
    "cost",
];

pub const KEYWORD_BONUS: f64 = 0.1;

/// Keyword-weighted Jaccard similarity between two texts, in `[0, 1]`.
///
/// Tokens are the lower-cased whitespace-separated words of each text. A
/// keyword counts when it occurs as a substring of both texts, so "pumps"
/// and "pump" still earn the bonus. Two texts without tokens score 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();

    let union = tokens_a.union(&tokens_b).count();
    let jaccard = if union == 0 {
        0.0
    } else {
        tokens_a.intersection(&tokens_b).count() as f64 / union as f64
    };

    let shared_keywords = RENEWABLE_KEYWORDS
        .iter()
        .filter(|keyword| a.contains(*keyword) && b.contains(*keyword))
        .count();

    (jaccard + shared_keywords as f64 * KEYWORD_BONUS).clamp(0.0, 1.0)
}
