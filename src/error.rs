//! Configuration error types for the resource API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use resource_api::{ConfigError, Credentials};
//!
//! let result = Credentials::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyCredentials)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Credentials cannot be empty.
    #[error("Credentials cannot be empty. Please provide the encoded client id and secret.")]
    EmptyCredentials,

    /// A URL failed validation.
    #[error("Invalid URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.example.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },
}
