//! WASM bindings for fuzzy search.
//!
//! Lets the web app run the same ranking in the browser, typically from a
//! worker fed by a debounced search box.

use crate::catalog::rank_json_str;
use wasm_bindgen::prelude::*;

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::edit_distance(a, b)
}

/// Similarity of two strings in `[0, 1]`.
#[wasm_bindgen]
pub fn similarity_score(a: &str, b: &str) -> f64 {
    crate::similarity(a, b)
}

/// Check if `query` fuzzily matches `target`.
///
/// # Arguments
/// * `query` - Search query
/// * `target` - Text to match against
/// * `threshold` - Minimum similarity in `[0, 1]`
#[wasm_bindgen]
pub fn fuzzy_matches(query: &str, target: &str, threshold: f64) -> Result<bool, JsValue> {
    crate::fuzzy_match(query, target, threshold).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rank catalog items and return them as JSON.
///
/// # Arguments
/// * `query` - Search query; blank returns the items unchanged
/// * `items_json` - JSON array of item objects
/// * `fields_json` - JSON array of field keys or dotted paths, e.g. `["name", "cuisine"]`
/// * `threshold` - Minimum item score in `[0, 1]`
///
/// # Returns
/// JSON array of the matching items in relevance order
#[wasm_bindgen]
pub fn rank_items(
    query: &str,
    items_json: &str,
    fields_json: &str,
    threshold: f64,
) -> Result<String, JsValue> {
    let fields: Vec<String> = serde_json::from_str(fields_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    rank_json_str(items_json, query, &fields, threshold)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
