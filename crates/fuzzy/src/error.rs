//! Error types for the fuzzy crate.

use thiserror::Error;

/// Result type alias for fuzzy matching operations.
pub type Result<T> = std::result::Result<T, FuzzyError>;

/// Errors that can occur during matching and ranking.
///
/// "No match" is never an error: an empty result set is an ordinary return
/// value. Every variant here is a caller contract violation or a problem with
/// supplied configuration/catalog data.
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// Threshold or other argument outside its contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unreadable or invalid search configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with foodshare-core error handling.
/// Range: 11xxx for fuzzy search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyErrorCode {
    /// Threshold or other argument outside its contract
    InvalidArgument = 11001,
    /// Unreadable or invalid search configuration
    Config = 11002,
    /// JSON parsing error
    JsonParsing = 11003,
}

impl FuzzyError {
    /// Returns the error code for this error.
    pub fn code(&self) -> FuzzyErrorCode {
        match self {
            FuzzyError::InvalidArgument(_) => FuzzyErrorCode::InvalidArgument,
            FuzzyError::Config(_) => FuzzyErrorCode::Config,
            FuzzyError::Json(_) => FuzzyErrorCode::JsonParsing,
        }
    }
}
