//! Core error types for skycast-core.
//!
//! The pure classifiers (conditions, alerts) never fail -- unmapped input
//! resolves to a safe default and is deliberately silent. Errors here cover
//! the fallible edges: configuration, the weather provider, device signals,
//! and input validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for skycast-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Weather provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Device signal errors
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Weather-provider errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No API key configured
    #[error("Weather API key not configured")]
    ApiKeyMissing,

    /// Transport-level failure
    #[error("Weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Weather API error: HTTP {status}")]
    Status { status: u16 },

    /// Response body did not match the expected shape
    #[error("Failed to decode weather payload: {0}")]
    Decode(String),

    /// Payload was well-formed but unusable (e.g. no forecast days)
    #[error("Empty forecast in provider payload")]
    EmptyForecast,
}

/// Device-signal errors. These are soft by design: a failed sub-signal
/// degrades the detection cycle, it never aborts it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Platform refused the underlying capability
    #[error("Permission denied for {capability}")]
    PermissionDenied { capability: String },

    /// Proximity scan could not run or was interrupted
    #[error("Proximity scan failed: {0}")]
    ScanFailed(String),

    /// Position fix unavailable
    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    /// Network state could not be read
    #[error("Network status unavailable: {0}")]
    NetworkUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
