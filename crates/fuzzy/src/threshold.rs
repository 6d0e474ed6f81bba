//! Match thresholds.

use crate::error::{FuzzyError, Result};
use serde::Deserialize;

/// General-purpose match threshold.
///
/// Tuned by trial; callers may override it per call.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Threshold for lenient domains such as restaurant and food names, where
/// transliterated spellings ("kottu" / "koththu") are common.
pub const LENIENT_THRESHOLD: f64 = 0.55;

/// A similarity threshold validated to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// [`DEFAULT_THRESHOLD`]
    pub const DEFAULT: Threshold = Threshold(DEFAULT_THRESHOLD);

    /// [`LENIENT_THRESHOLD`]
    pub const LENIENT: Threshold = Threshold(LENIENT_THRESHOLD);

    /// Creates a threshold, rejecting NaN and values outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FuzzyError::InvalidArgument(format!(
                "threshold {value} is outside [0, 1]"
            )))
        }
    }

    /// Returns the raw threshold value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if `score` meets this threshold.
    #[inline]
    pub fn accepts(self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = FuzzyError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}
