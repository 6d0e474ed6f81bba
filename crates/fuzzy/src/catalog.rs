//! Ranking for JSON catalogs.
//!
//! The host app hands over listings and restaurants as JSON arrays of
//! objects. Searchable fields are named by key (`"name"`) or dotted path
//! (`"restaurant.name"`). Arrays met along a path fan out, so `"tags"` on
//! `{"tags": ["vegan", "spicy"]}` yields two fields.
//!
//! Only JSON strings are searchable. Missing keys, `null`, numbers and
//! booleans count as absent fields.

use crate::error::{FuzzyError, Result};
use crate::ranker::{rank_matches, MatchResult};
use serde_json::Value;

/// Collect the text fields of `item` named by `fields`.
///
/// # Example
/// ```
/// use foodshare_fuzzy::catalog::field_values;
/// use serde_json::json;
///
/// let item = json!({"name": "Kottu", "restaurant": {"name": "Hela Bojun"}, "price": 450});
/// let fields = field_values(&item, &["name", "restaurant.name", "price"]);
/// assert_eq!(fields, vec![Some("Kottu"), Some("Hela Bojun"), None]);
/// ```
pub fn field_values<'v, S: AsRef<str>>(item: &'v Value, fields: &[S]) -> Vec<Option<&'v str>> {
    let mut out = Vec::with_capacity(fields.len());
    for field in fields {
        let segments: Vec<&str> = field.as_ref().split('.').collect();
        collect_path(item, &segments, &mut out);
    }
    out
}

fn collect_path<'v>(value: &'v Value, segments: &[&str], out: &mut Vec<Option<&'v str>>) {
    match (value, segments.split_first()) {
        (Value::Array(elements), _) => {
            for element in elements {
                collect_path(element, segments, out);
            }
        }
        (Value::String(text), None) => out.push(Some(text)),
        (Value::Object(map), Some((key, rest))) => match map.get(*key) {
            Some(child) => collect_path(child, rest, out),
            None => out.push(None),
        },
        _ => out.push(None),
    }
}

/// Rank JSON catalog items, keeping scores.
///
/// # Errors
/// `InvalidArgument` if `threshold` is outside `[0, 1]` or `fields` is empty.
pub fn rank_json_matches<'a, S: AsRef<str>>(
    items: &'a [Value],
    query: &str,
    fields: &[S],
    threshold: f64,
) -> Result<Vec<MatchResult<&'a Value>>> {
    if fields.is_empty() {
        return Err(FuzzyError::InvalidArgument(
            "at least one searchable field is required".to_string(),
        ));
    }

    rank_matches(items, query, |item| field_values(item, fields), threshold)
}

/// Rank JSON catalog items by `query` over the named `fields`.
///
/// # Example
/// ```
/// use foodshare_fuzzy::catalog::rank_json;
/// use serde_json::json;
///
/// let items = vec![json!({"name": "Burger"}), json!({"name": "Pizza"})];
/// let ranked = rank_json(&items, "piza", &["name"], 0.6).unwrap();
/// assert_eq!(ranked, vec![&json!({"name": "Pizza"})]);
/// ```
pub fn rank_json<'a, S: AsRef<str>>(
    items: &'a [Value],
    query: &str,
    fields: &[S],
    threshold: f64,
) -> Result<Vec<&'a Value>> {
    let matches = rank_json_matches(items, query, fields, threshold)?;
    Ok(matches.into_iter().map(|m| m.item).collect())
}

/// Parse a JSON array of items.
///
/// # Errors
/// `Json` for malformed input, `InvalidArgument` if the root is not an array.
pub fn parse_catalog(items_json: &str) -> Result<Vec<Value>> {
    match serde_json::from_str(items_json)? {
        Value::Array(items) => Ok(items),
        other => Err(FuzzyError::InvalidArgument(format!(
            "catalog must be a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

/// Rank a JSON array given as text and return the ranked array as text.
///
/// Object keys keep their input order, so a blank query returns the compact
/// form of `items_json` unchanged.
pub fn rank_json_str<S: AsRef<str>>(
    items_json: &str,
    query: &str,
    fields: &[S],
    threshold: f64,
) -> Result<String> {
    let items = parse_catalog(items_json)?;
    let ranked = rank_json(&items, query, fields, threshold)?;
    Ok(serde_json::to_string(&ranked)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn restaurants() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Hela Bojun", "cuisine": "Sri Lankan", "address": null}),
            json!({"id": 2, "name": "Pizza Corner", "cuisine": "Italian", "address": "Galle Road"}),
            json!({"id": 3, "name": "Ministry of Crab", "cuisine": "Seafood"}),
            json!({"id": 4, "name": "Koththu Kade", "tags": ["street food", "late night"]}),
        ]
    }

    fn ids(items: &[&Value]) -> Vec<i64> {
        items.iter().filter_map(|v| v["id"].as_i64()).collect()
    }

    #[test]
    fn test_field_values_missing_and_null() {
        let item = json!({"name": "Appa", "description": null});
        assert_eq!(
            field_values(&item, &["name", "description", "category"]),
            vec![Some("Appa"), None, None]
        );
    }

    #[test]
    fn test_field_values_nested_and_arrays() {
        let item = json!({
            "tags": ["vegan", 3, "spicy"],
            "menu": [{"name": "Dosa"}, {"name": "Vadai"}],
        });
        assert_eq!(
            field_values(&item, &["tags", "menu.name"]),
            vec![Some("vegan"), None, Some("spicy"), Some("Dosa"), Some("Vadai")]
        );
    }

    #[test]
    fn test_field_values_path_through_scalar() {
        let item = json!({"name": "Rice"});
        assert_eq!(field_values(&item, &["name.first"]), vec![None]);
    }

    #[test]
    fn test_rank_json_typo() {
        let items = restaurants();
        let ranked = rank_json(&items, "kottu", &["name", "cuisine", "tags"], 0.55).unwrap();
        assert_eq!(ids(&ranked), vec![4]);
    }

    #[test]
    fn test_rank_json_searches_secondary_fields() {
        let items = restaurants();
        let ranked = rank_json(&items, "seafod", &["name", "cuisine"], 0.6).unwrap();
        assert_eq!(ids(&ranked), vec![3]);
    }

    #[test]
    fn test_rank_json_blank_query() {
        let items = restaurants();
        let ranked = rank_json(&items, " ", &["name"], 0.6).unwrap();
        assert_eq!(ids(&ranked), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_json_requires_fields() {
        let items = restaurants();
        let fields: [&str; 0] = [];
        assert!(matches!(
            rank_json(&items, "crab", &fields, 0.6),
            Err(FuzzyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_catalog_rejects_non_array() {
        assert!(matches!(parse_catalog("{\"name\": 1}"), Err(FuzzyError::InvalidArgument(_))));
        assert!(matches!(parse_catalog("[1,"), Err(FuzzyError::Json(_))));
        assert_eq!(parse_catalog("[]").unwrap().len(), 0);
    }

    #[test]
    fn test_rank_json_str() {
        let input = r#"[{"name": "Burger"}, {"name": "Pizza"}]"#;
        let output = rank_json_str(input, "piza", &["name"], 0.6).unwrap();
        assert_eq!(output, r#"[{"name":"Pizza"}]"#);
    }

    #[test]
    fn test_rank_json_str_blank_query_keeps_key_order() {
        let input = r#"[{"name":"Pizza","cuisine":"Italian","id":2},{"zone":"north","name":"Appa"}]"#;
        let output = rank_json_str(input, "", &["name"], 0.6).unwrap();
        assert_eq!(output, input);
    }
}
