//! Relevance ranking of caller-owned catalog items.
//!
//! Every searchable field of every item is scored with the field matcher; an
//! item keeps its best field score. Items under the threshold are dropped and
//! the survivors are stably sorted: exact (substring) matches first, then by
//! descending score, ties keeping their input order.
//!
//! A blank query means "no active search" and returns the catalog untouched.

use crate::matcher::{folded_field_score, FieldScore};
use crate::threshold::Threshold;
use crate::Result;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, instrument, trace};

/// A ranked catalog item.
///
/// Derived per query and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<T> {
    /// The matched item
    pub item: T,
    /// Best field score in `[0, 1]`
    pub score: f64,
    /// Some field contained the query as a substring
    pub exact_match: bool,
}

/// Items that can lend their searchable text fields directly.
///
/// Field order only matters in that scanning stops at the first exact hit.
pub trait Searchable {
    /// Returns the item's text fields; absent fields are `None`.
    fn search_fields(&self) -> Vec<Option<&str>>;
}

/// Rank `items` by how well their fields match `query`.
///
/// # Arguments
/// * `items` - Catalog to search; never mutated
/// * `query` - Raw search-box text
/// * `extractor` - Maps an item to its text fields (absent fields as `None`)
/// * `threshold` - Minimum item score in `[0, 1]`
///
/// # Returns
/// The matching items in relevance order, or every item in input order when
/// `query` is blank.
///
/// # Errors
/// `InvalidArgument` if `threshold` is outside `[0, 1]`.
///
/// # Example
/// ```
/// use foodshare_fuzzy::rank_by_search;
///
/// let dishes = ["Burger", "Pizza"];
/// let ranked = rank_by_search(&dishes, "piza", |dish| vec![Some(*dish)], 0.6).unwrap();
/// assert_eq!(ranked, vec![&"Pizza"]);
/// ```
pub fn rank_by_search<'a, T, F>(
    items: &'a [T],
    query: &str,
    extractor: F,
    threshold: f64,
) -> Result<Vec<&'a T>>
where
    F: for<'x> Fn(&'x T) -> Vec<Option<&'x str>>,
{
    let matches = rank_matches(items, query, extractor, threshold)?;
    Ok(matches.into_iter().map(|m| m.item).collect())
}

/// Like [`rank_by_search`], keeping each item's score and exact flag.
///
/// For a blank query every item is returned in input order with a score of
/// `1.0` and `exact_match == false`.
#[instrument(level = "debug", skip_all, fields(items = items.len()))]
pub fn rank_matches<'a, T, F>(
    items: &'a [T],
    query: &str,
    extractor: F,
    threshold: f64,
) -> Result<Vec<MatchResult<&'a T>>>
where
    F: for<'x> Fn(&'x T) -> Vec<Option<&'x str>>,
{
    let threshold = Threshold::new(threshold)?;

    let Some(query) = active_query(query) else {
        debug!("blank query, returning catalog unchanged");
        return Ok(passthrough(items));
    };

    let scored = items
        .iter()
        .map(|item| score_item(item, &query, &extractor))
        .collect();

    Ok(select(scored, threshold))
}

/// Rank items that implement [`Searchable`].
pub fn rank_searchable<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    threshold: f64,
) -> Result<Vec<&'a T>> {
    rank_by_search(items, query, T::search_fields, threshold)
}

/// [`rank_matches`] with per-item scoring spread across the rayon pool.
///
/// Output is identical to the sequential version: scores are collected in
/// input order before the stable sort.
#[cfg(feature = "parallel")]
#[instrument(level = "debug", skip_all, fields(items = items.len()))]
pub fn par_rank_matches<'a, T, F>(
    items: &'a [T],
    query: &str,
    extractor: F,
    threshold: f64,
) -> Result<Vec<MatchResult<&'a T>>>
where
    T: Sync,
    F: for<'x> Fn(&'x T) -> Vec<Option<&'x str>> + Sync,
{
    use rayon::prelude::*;

    let threshold = Threshold::new(threshold)?;

    let Some(query) = active_query(query) else {
        debug!("blank query, returning catalog unchanged");
        return Ok(passthrough(items));
    };

    let scored = items
        .par_iter()
        .map(|item| score_item(item, &query, &extractor))
        .collect();

    Ok(select(scored, threshold))
}

/// Case-folded query, or `None` when the search box is effectively empty.
///
/// Non-blank queries are matched as typed, surrounding whitespace included,
/// so the ranker agrees with [`crate::field_score`] and [`crate::fuzzy_match`].
fn active_query(query: &str) -> Option<String> {
    (!query.trim().is_empty()).then(|| query.to_lowercase())
}

fn passthrough<T>(items: &[T]) -> Vec<MatchResult<&T>> {
    items
        .iter()
        .map(|item| MatchResult { item, score: 1.0, exact_match: false })
        .collect()
}

/// Best field score for one item. Stops at the first exact hit.
fn score_item<'a, T, F>(item: &'a T, query: &str, extractor: &F) -> MatchResult<&'a T>
where
    F: for<'x> Fn(&'x T) -> Vec<Option<&'x str>>,
{
    let mut best = FieldScore::NONE;

    for field in extractor(item).into_iter().flatten() {
        if field.trim().is_empty() {
            continue;
        }

        let score = folded_field_score(query, &field.to_lowercase());
        if score.exact {
            best = score;
            break;
        }
        if score.score > best.score {
            best = score;
        }
    }

    MatchResult { item, score: best.score, exact_match: best.exact }
}

fn select<T>(mut scored: Vec<MatchResult<T>>, threshold: Threshold) -> Vec<MatchResult<T>> {
    let total = scored.len();
    scored.retain(|m| {
        let keep = threshold.accepts(m.score);
        trace!(score = m.score, exact = m.exact_match, keep, "scored item");
        keep
    });

    // `sort_by` is stable: equal entries keep their input order
    scored.sort_by(compare_matches);

    debug!(total, matched = scored.len(), threshold = threshold.value(), "ranked catalog");
    scored
}

fn compare_matches<T>(a: &MatchResult<T>, b: &MatchResult<T>) -> Ordering {
    b.exact_match
        .cmp(&a.exact_match)
        .then_with(|| b.score.total_cmp(&a.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_THRESHOLD, LENIENT_THRESHOLD};

    #[derive(Debug, PartialEq)]
    struct Dish {
        name: String,
        description: Option<String>,
    }

    impl Dish {
        fn new(name: &str) -> Self {
            Self { name: name.to_string(), description: None }
        }

        fn described(name: &str, description: &str) -> Self {
            Self { name: name.to_string(), description: Some(description.to_string()) }
        }
    }

    impl Searchable for Dish {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(&self.name), self.description.as_deref()]
        }
    }

    fn names<'a>(dishes: &[&'a Dish]) -> Vec<&'a str> {
        dishes.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_typo_finds_single_item() {
        let items = vec![Dish::new("Burger"), Dish::new("Pizza")];
        let ranked = rank_searchable(&items, "piza", DEFAULT_THRESHOLD).unwrap();
        assert_eq!(ranked, vec![&items[1]]);
    }

    #[test]
    fn test_blank_query_returns_everything_in_order() {
        let items = vec![Dish::new("Rice"), Dish::new("Curry"), Dish::new("Dhal")];
        for query in ["", "   ", "\t\n"] {
            let ranked = rank_searchable(&items, query, DEFAULT_THRESHOLD).unwrap();
            assert_eq!(names(&ranked), vec!["Rice", "Curry", "Dhal"]);
        }
    }

    #[test]
    fn test_blank_query_still_validates_threshold() {
        let items = vec![Dish::new("Rice")];
        assert!(rank_searchable(&items, "", 1.2).is_err());
    }

    #[test]
    fn test_exact_before_fuzzy() {
        let items = vec![
            Dish::new("Chiken"),
            Dish::new("Devilled Chicken"),
            Dish::new("Chicken"),
        ];
        let matches = rank_matches(&items, "chicken", Dish::search_fields, DEFAULT_THRESHOLD)
            .unwrap();

        let order: Vec<_> = matches.iter().map(|m| (m.item.name.as_str(), m.exact_match)).collect();
        assert_eq!(
            order,
            vec![("Devilled Chicken", true), ("Chicken", true), ("Chiken", false)]
        );
    }

    #[test]
    fn test_fuzzy_sorted_by_score_descending() {
        let items = vec![Dish::new("Lamprice"), Dish::new("Lamprais"), Dish::new("Lumprais")];
        let matches = rank_matches(&items, "lampris", Dish::search_fields, LENIENT_THRESHOLD)
            .unwrap();

        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(matches[0].item.name, "Lamprais");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            Dish::new("Kottu Roti"),
            Dish::new("Cheese Kottu"),
            Dish::new("Kottu"),
            Dish::new("Egg Kottu"),
        ];
        let first = rank_searchable(&items, "kottu", DEFAULT_THRESHOLD).unwrap();
        let second = rank_searchable(&items, "kottu", DEFAULT_THRESHOLD).unwrap();

        assert_eq!(names(&first), vec!["Kottu Roti", "Cheese Kottu", "Kottu", "Egg Kottu"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_best_field_wins() {
        let items = vec![
            Dish::described("House Special", "fried rice with devilled prawns"),
            Dish::new("Prawn Curry"),
        ];
        let matches = rank_matches(&items, "prawns", Dish::search_fields, DEFAULT_THRESHOLD)
            .unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].item.name, "House Special");
        assert!(matches[0].exact_match);
        assert!(!matches[1].exact_match);
    }

    #[test]
    fn test_absent_and_empty_fields_skipped() {
        let items = vec![Dish::described("", "   "), Dish::new("Hoppers")];
        let ranked = rank_searchable(&items, "hopers", DEFAULT_THRESHOLD).unwrap();
        assert_eq!(names(&ranked), vec!["Hoppers"]);
    }

    #[test]
    fn test_item_without_fields_only_kept_at_zero_threshold() {
        let items = vec![Dish::described("", "")];
        assert!(rank_searchable(&items, "rice", 0.1).unwrap().is_empty());
        assert_eq!(rank_searchable(&items, "rice", 0.0).unwrap().len(), 1);
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let items = vec![Dish::new("Pizza"), Dish::new("Pizza Roll")];
        let matches = rank_matches(&items, "pizza ", Dish::search_fields, 0.6).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].item.name, "Pizza Roll");
        assert!(matches[0].exact_match);

        let direct = crate::field_score("pizza ", "Pizza");
        assert!(!matches[1].exact_match);
        assert!(!direct.exact);
        assert_eq!(matches[1].score, direct.score);
        assert!(matches[1].score < 1.0);
    }

    #[test]
    fn test_closure_extractor() {
        let items = vec![("Fish Bun", Some("bakery")), ("Vadai", None)];
        let ranked = rank_by_search(&items, "bakry", |(name, tag)| vec![Some(*name), *tag], 0.6)
            .unwrap();
        assert_eq!(ranked, vec![&items[0]]);
    }

    #[test]
    fn test_result_never_longer_than_input() {
        let items = vec![Dish::new("a"), Dish::new("b")];
        let ranked = rank_searchable(&items, "a", 0.0).unwrap();
        assert!(ranked.len() <= items.len());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let items: Vec<Dish> = ["Kottu", "Koththu", "Kotthu Roti", "Pittu", "Kothu"]
            .iter()
            .map(|n| Dish::new(n))
            .collect();

        let sequential = rank_matches(&items, "kottu", Dish::search_fields, LENIENT_THRESHOLD)
            .unwrap();
        let parallel =
            par_rank_matches(&items, "kottu", Dish::search_fields, LENIENT_THRESHOLD)
                .unwrap();
        assert_eq!(sequential, parallel);
    }
}
