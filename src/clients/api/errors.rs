//! Error type for [`ApiClient`](super::ApiClient) operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use resource_api::{ApiClient, ClientError};
//!
//! match client.get("people", None, None).await {
//!     Ok(body) => println!("People: {body}"),
//!     Err(ClientError::NotReady) => println!("Still fetching the access token"),
//!     Err(ClientError::InitializationFailed(e)) => println!("Could not authenticate: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::oauth::AuthError;
use crate::clients::HttpError;

/// Error type for [`ApiClient`](super::ApiClient) operations.
///
/// Transport failures are wrapped unmodified in [`ClientError::Http`]. Pass
/// the error to [`normalize_error`](crate::clients::normalize_error) for an
/// enriched, human-readable message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// `get` was called before the access token was obtained.
    #[error("API client is not ready: the access token has not been obtained yet")]
    NotReady,

    /// The access token could not be obtained; the client will never become ready.
    #[error("API client initialization failed: {0}")]
    InitializationFailed(#[source] AuthError),

    /// The initialization task ended without reporting an outcome.
    #[error("API client initialization was aborted before completing")]
    InitializationAborted,

    /// A transport-level failure.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify ClientError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientError>();
};
