//! Error types for MongoDB connection setup.

use crawlkit_settings::SettingsError;
use mongodb::error::ErrorKind;
use thiserror::Error;

/// Result type for MongoDB connection setup.
pub type MongoResult<T> = Result<T, MongoError>;

/// Server error code for a rejected login.
const AUTHENTICATION_FAILED_CODE: i32 = 18;

/// Errors that can occur while resolving parameters or connecting.
#[derive(Error, Debug)]
pub enum MongoError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Authentication(String),
}

impl MongoError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Check if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a connection error.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Check if this is an authentication error.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

impl From<SettingsError> for MongoError {
    fn from(err: SettingsError) -> Self {
        MongoError::Config(err.to_string())
    }
}

impl From<mongodb::error::Error> for MongoError {
    fn from(err: mongodb::error::Error) -> Self {
        let msg = err.to_string();

        match err.kind.as_ref() {
            ErrorKind::Authentication { .. } => MongoError::Authentication(msg),
            ErrorKind::Command(cmd) if cmd.code == AUTHENTICATION_FAILED_CODE => {
                MongoError::Authentication(msg)
            }
            // Handshake failures can surface wrapped in server selection errors
            _ if msg.contains("Authentication failed") => MongoError::Authentication(msg),
            _ => MongoError::Connection(msg),
        }
    }
}
