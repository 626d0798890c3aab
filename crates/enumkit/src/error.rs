//! Error type for enum construction and lookup configuration

use thiserror::Error;

/// Errors raised while building an [`Enum`](crate::Enum) or parsing lookup
/// configuration.
///
/// Lookup misses are never errors; accessors return `None` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// Input has the wrong shape (definition not an object, entry not an
    /// array, unknown `arguType`, config not an object)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Definition text is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(String),
}

impl EnumError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<serde_json::Error> for EnumError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
