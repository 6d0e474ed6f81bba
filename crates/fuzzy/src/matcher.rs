//! Per-field fuzzy matching.
//!
//! A query matches a text field when any of these holds, checked in order:
//! 1. the query is a case-insensitive substring of the field (exact match)
//! 2. the whole field is similar enough to the query
//! 3. some whitespace-delimited word of the field is similar enough
//!
//! Rule 3 lets a short query such as `"biryni"` match `"Chicken Biryani
//! Special"`, whose overall length would otherwise drown out the one word
//! the user meant.

use crate::similarity::folded_similarity;
use crate::threshold::Threshold;
use crate::Result;

/// Best score of a query against one field (or the best field of an item).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScore {
    /// Similarity in `[0, 1]`
    pub score: f64,
    /// Query was found as a case-insensitive substring
    pub exact: bool,
}

impl FieldScore {
    /// No match at all
    pub const NONE: FieldScore = FieldScore { score: 0.0, exact: false };

    /// Substring match
    pub const EXACT: FieldScore = FieldScore { score: 1.0, exact: true };

    #[inline]
    fn fuzzy(score: f64) -> Self {
        Self { score, exact: false }
    }
}

/// Check whether `query` fuzzily matches `target`.
///
/// # Arguments
/// * `query` - Search query
/// * `target` - Text field to match against
/// * `threshold` - Minimum similarity in `[0, 1]` for a fuzzy match
///
/// # Errors
/// `InvalidArgument` if `threshold` is outside `[0, 1]`.
///
/// # Example
/// ```
/// use foodshare_fuzzy::{fuzzy_match, LENIENT_THRESHOLD};
///
/// assert!(fuzzy_match("kottu", "Chicken Koththu", LENIENT_THRESHOLD).unwrap());
/// assert!(!fuzzy_match("xyz", "completely-different-string", 0.6).unwrap());
/// ```
pub fn fuzzy_match(query: &str, target: &str, threshold: f64) -> Result<bool> {
    let threshold = Threshold::new(threshold)?;
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    if target.contains(&query) {
        return Ok(true);
    }

    if threshold.accepts(folded_similarity(&query, &target)) {
        return Ok(true);
    }

    Ok(target
        .split_whitespace()
        .any(|word| threshold.accepts(folded_similarity(&query, word))))
}

/// Score `query` against a single field.
///
/// Returns [`FieldScore::EXACT`] for a substring hit, otherwise the best of
/// the whole-field and per-word similarities.
pub fn field_score(query: &str, target: &str) -> FieldScore {
    folded_field_score(&query.to_lowercase(), &target.to_lowercase())
}

/// [`field_score`] over inputs that are already case-folded.
pub(crate) fn folded_field_score(query: &str, target: &str) -> FieldScore {
    if target.contains(query) {
        return FieldScore::EXACT;
    }

    let best = target
        .split_whitespace()
        .map(|word| folded_similarity(query, word))
        .fold(folded_similarity(query, target), f64::max);

    FieldScore::fuzzy(best)
}
