//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Completion API key is missing")]
    MissingApiKey,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid completion base URL format")]
    InvalidBaseUrl,

    #[error("Persona name cannot be empty")]
    MissingPersonaName,
}
