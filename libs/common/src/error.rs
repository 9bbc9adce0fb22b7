//! Custom error types for the common library
//!
//! This module defines infrastructure error types that can be used
//! throughout the application.

use redis::RedisError;
use thiserror::Error;

/// Error raised while loading client configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration sources could not be read or deserialized
    #[error("Configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was present but unusable
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Custom error type for session store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error occurred while talking to the Redis backend
    #[error("Session store backend error: {0}")]
    Backend(#[source] RedisError),

    /// The store URL could not be used
    #[error("Session store configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
