//! Error types for storyboard planning.

use thiserror::Error;

/// Result type alias for storyboard operations.
pub type StoryboardResult<T> = Result<T, StoryboardError>;

/// Errors that can occur while planning a storyboard.
///
/// Planning either yields a complete scene sequence or one of these; there is
/// no partially applied state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoryboardError {
    /// Campaign input failed validation (missing required field, zero duration).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A catalog lookup failed (e.g. unknown mood preset id).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Index out of bounds for list operations.
    #[error("Index {index} out of bounds for list of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoryboardError {
    /// Creates a Validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a Validation error for an empty required field.
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("'{}' is required", field))
    }

    /// Creates a Configuration error for a mood id not in the catalog.
    pub fn unknown_mood(id: impl AsRef<str>) -> Self {
        Self::Configuration(format!("undefined mood preset '{}'", id.as_ref()))
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Creates a Serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true for input-validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true for catalog/configuration failures.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<serde_json::Error> for StoryboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
