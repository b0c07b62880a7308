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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid analytics endpoint URL format")]
    InvalidAnalyticsEndpoint,

    #[error("Invalid analytics timeout")]
    InvalidAnalyticsTimeout,

    #[error("Invalid display asset base URL format")]
    InvalidAssetBaseUrl,

    #[error("Display asset base URL must use HTTPS in production")]
    AssetBaseUrlMustBeHttps,
}
