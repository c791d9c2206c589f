//! Error types for user-agent injection.

use thiserror::Error;

/// Result type for user-agent operations.
pub type UserAgentResult<T> = Result<T, UserAgentError>;

/// Errors that can occur while injecting a user agent.
#[derive(Error, Debug)]
pub enum UserAgentError {
    /// The pool has no candidates to draw from.
    #[error("user agent pool is empty")]
    EmptyPool,

    /// The drawn value cannot be used as a header value.
    #[error("invalid header value for `{name}`: {value:?}")]
    InvalidHeaderValue { name: String, value: String },
}

impl UserAgentError {
    /// Create an invalid header value error.
    pub fn invalid_header_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidHeaderValue {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Check if this is an empty pool error.
    pub fn is_empty_pool(&self) -> bool {
        matches!(self, Self::EmptyPool)
    }
}
