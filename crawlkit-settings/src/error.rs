//! Error types for settings lookup and resolution.

use thiserror::Error;

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur while loading or resolving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Error reading a settings file.
    #[error("failed to read settings file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not a flat TOML table of supported values.
    #[error("invalid settings file: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    /// A present value cannot be read as the requested kind.
    #[error("invalid value for `{key}`: {message}")]
    InvalidValue { key: String, message: String },

    /// No source yielded a value and there is no default.
    #[error("no value configured for `{field}`")]
    Missing { field: String },
}

impl SettingsError {
    /// Create an invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Check if this is a missing field error.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Check if this is an invalid value error.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}
