//! Transport error types.
//!
//! Every failed GET falls into exactly one of three shapes:
//!
//! - [`HttpStatusError`]: a response arrived with a non-2xx status
//! - [`NoResponseError`]: the request was sent but no response arrived
//! - [`InvalidRequestError`]: the request could not be built, or its response
//!   could not be followed or decoded
//!
//! [`HttpError`] unifies them.
//!
//! # Example
//!
//! ```rust,ignore
//! use resource_api::clients::HttpError;
//!
//! match transport.get("people?pagesize=10").await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::Status(e)) => println!("API error {}: {}", e.status, e.body),
//!     Err(HttpError::NoResponse(e)) => println!("Unreachable: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Bad request: {e}"),
//! }
//! ```

use thiserror::Error;

/// A response was received with a non-2xx status.
///
/// `body` has already been through the response-transform pipeline, so a
/// JSON error document is available as structured data.
///
/// # Example
///
/// ```rust
/// use resource_api::clients::HttpStatusError;
///
/// let error = HttpStatusError {
///     status: 404,
///     url: "https://api.example.com/people/7".to_string(),
///     body: serde_json::json!({"msg": "not found"}),
/// };
/// assert_eq!(error.to_string(), "Request failed with status code 404");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Request failed with status code {status}")]
pub struct HttpStatusError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The full request URL.
    pub url: String,
    /// The transformed response body.
    pub body: serde_json::Value,
}

/// The request was dispatched but no response arrived.
///
/// Covers timeouts, refused or reset connections and DNS failures.
#[derive(Debug, Error)]
#[error("Request to {url} failed: {source}")]
pub struct NoResponseError {
    /// The full request URL.
    pub url: String,
    /// The underlying network error.
    #[source]
    pub source: reqwest::Error,
}

/// The request could not be built, or its response could not be followed or
/// decoded.
///
/// # Example
///
/// ```rust
/// use resource_api::clients::InvalidRequestError;
///
/// let error = InvalidRequestError {
///     url: "https://api.example.com/a b".to_string(),
///     reason: "invalid header value".to_string(),
/// };
/// assert!(error.to_string().contains("invalid header value"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Could not complete request to {url}: {reason}")]
pub struct InvalidRequestError {
    /// The URL that was being requested.
    pub url: String,
    /// Why the request failed.
    pub reason: String,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Status(#[from] HttpStatusError),

    /// No response was received.
    #[error(transparent)]
    NoResponse(#[from] NoResponseError),

    /// The request could not be completed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
}

impl HttpError {
    /// Classifies a `reqwest` send failure for the given URL.
    ///
    /// Builder, redirect-policy and decode failures become
    /// [`HttpError::InvalidRequest`]; a response may have arrived for the
    /// latter two, so they are not reported as missing responses.
    pub(crate) fn from_send_error(url: &str, error: reqwest::Error) -> Self {
        if error.is_builder() || error.is_redirect() || error.is_decode() {
            Self::InvalidRequest(InvalidRequestError {
                url: url.to_string(),
                reason: error.to_string(),
            })
        } else {
            Self::NoResponse(NoResponseError {
                url: url.to_string(),
                source: error,
            })
        }
    }

    /// Returns the HTTP status code if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(e) => Some(e.status),
            Self::NoResponse(_) | Self::InvalidRequest(_) => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
