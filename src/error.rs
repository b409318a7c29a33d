//! Unified error types for profile-settings.
//!
//! This module provides a central `SettingsError` enum that covers the
//! failure categories outside of form validation, enabling consistent
//! `Result`-based error propagation with the `?` operator.
//!
//! Field validation failures are not errors in this sense: they are collected
//! as [`FieldValidationError`](crate::profile::FieldValidationError)s and
//! shown next to their fields.

use std::fmt;

/// Central error type for profile-settings operations.
#[derive(Debug)]
pub enum SettingsError {
    /// I/O errors (config file, draft file, diagnostic output).
    Io(std::io::Error),
    /// Configuration errors (parsing, missing values).
    Config(String),
    /// Serialization/deserialization errors (TOML, JSON).
    Serialization(String),
    /// Home directory not found.
    HomeNotFound,
    /// The avatar file could not be turned into a URL.
    Avatar(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "I/O error: {}", e),
            SettingsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SettingsError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            SettingsError::HomeNotFound => write!(f, "Could not find home directory"),
            SettingsError::Avatar(msg) => write!(f, "Avatar error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<toml::ser::Error> for SettingsError {
    fn from(e: toml::ser::Error) -> Self {
        SettingsError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SettingsError {
    fn from(e: toml::de::Error) -> Self {
        SettingsError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Serialization(e.to_string())
    }
}
