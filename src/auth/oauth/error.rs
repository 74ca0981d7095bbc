//! Error types for the client-credentials token fetch.
//!
//! # Example
//!
//! ```rust
//! use resource_api::auth::oauth::AuthError;
//!
//! let error = AuthError::TokenRequestFailed {
//!     status: 401,
//!     message: "invalid_client".to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! ```

use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The token request failed.
    ///
    /// `status` is the HTTP status code, or `0` when no response was received.
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// The HTTP status code returned, or 0 for network failures.
        status: u16,
        /// The response body or network error description.
        message: String,
    },

    /// The token endpoint answered 2xx but the body was not a token.
    #[error("Invalid token response: {message}")]
    InvalidTokenResponse {
        /// What went wrong while decoding the body.
        message: String,
    },
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
