//! Error types for tfe-orgs

use std::fmt;

use thiserror::Error;

/// Result type alias for tfe-orgs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Local input validation failure, raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {field}")]
pub struct ValidationError {
    /// Name of the offending input field
    pub field: &'static str,

    /// What was wrong with it
    pub kind: ValidationKind,
}

/// Kind of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// The field was empty
    Required,
    /// The field was set but does not match the identifier format
    InvalidFormat,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationKind::Required => f.write_str("missing required value for"),
            ValidationKind::InvalidFormat => f.write_str("invalid value for"),
        }
    }
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            kind: ValidationKind::Required,
        }
    }

    pub fn invalid(field: &'static str) -> Self {
        Self {
            field,
            kind: ValidationKind::InvalidFormat,
        }
    }
}

/// Errors produced by the transport layer.
///
/// The organization client never inspects these; they reach the caller as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized. Check the API token for this address.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("API token not configured. Set TFE_TOKEN or add `token` to the config file.")]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
