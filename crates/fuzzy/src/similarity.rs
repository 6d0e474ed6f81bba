//! Normalized similarity scores.

use crate::distance::folded_distance;

/// Calculate the similarity of two strings as a score in `[0, 1]`.
///
/// `similarity = (L - edit_distance(a, b)) / L` where `L` is the longer
/// input's length in characters after case folding. Two empty strings are
/// identical and score `1.0`.
///
/// # Example
/// ```
/// use foodshare_fuzzy::similarity;
///
/// assert_eq!(similarity("Pizza", "pizza"), 1.0);
/// assert_eq!(similarity("piza", "pizza"), 0.8);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    folded_similarity(&a.to_lowercase(), &b.to_lowercase())
}

/// Similarity over inputs that are already case-folded.
pub(crate) fn folded_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    let distance = folded_distance(a, b);
    (longest - distance) as f64 / longest as f64
}
