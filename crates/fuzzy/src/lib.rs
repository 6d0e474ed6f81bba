//! Typo-tolerant fuzzy search for FoodShare.
//!
//! Ranks a small in-memory catalog (dishes, restaurants, listings) against a
//! partial, possibly misspelled query. This crate provides:
//! - Levenshtein edit distance and normalized similarity
//! - Per-field fuzzy matching (substring, whole field, per word)
//! - Stable relevance ranking over caller-owned items
//! - JSON catalog ranking and WASM bindings for the web app
//! - TOML search profiles with named thresholds
//!
//! Every function is pure and synchronous; nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use foodshare_fuzzy::{rank_by_search, LENIENT_THRESHOLD};
//!
//! let menu = ["Chicken Koththu", "Egg Hoppers", "Fish Bun"];
//! let ranked = rank_by_search(&menu, "kottu", |dish| vec![Some(*dish)], LENIENT_THRESHOLD)
//!     .unwrap();
//! assert_eq!(ranked, vec![&"Chicken Koththu"]);
//! ```

mod distance;
mod similarity;
mod threshold;
mod matcher;
mod ranker;
mod error;
pub mod catalog;
pub mod config;

#[cfg(feature = "wasm")]
mod wasm;

pub use distance::edit_distance;
pub use similarity::similarity;
pub use threshold::{Threshold, DEFAULT_THRESHOLD, LENIENT_THRESHOLD};
pub use matcher::{field_score, fuzzy_match, FieldScore};
pub use ranker::{rank_by_search, rank_matches, rank_searchable, MatchResult, Searchable};
#[cfg(feature = "parallel")]
pub use ranker::par_rank_matches;
pub use config::{SearchConfig, SearchProfile};
pub use error::{FuzzyError, FuzzyErrorCode, Result};
