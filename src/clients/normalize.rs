//! Error normalization.
//!
//! [`normalize_error`] turns any [`ClientError`] into a [`NormalizedError`]
//! whose message says what went wrong in one line:
//!
//! | Kind | Message |
//! |------|---------|
//! | [`ErrorKind::HttpStatus`] | `<message>: <response body>.` |
//! | [`ErrorKind::NoResponse`] | `<message>` + [`NO_RESPONSE_SUFFIX`] |
//! | [`ErrorKind::Other`] | `<message>` |
//!
//! A `prepend` text, when given, goes first, separated by two spaces.

use serde_json::Value;
use thiserror::Error;

use crate::clients::api::ClientError;
use crate::clients::HttpError;

/// Suffix appended to errors where the request was sent but no response came back.
pub const NO_RESPONSE_SUFFIX: &str =
    ": no response received. The server may be unreachable or the request timed out.";

/// Classification of a normalized error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A response was received with a non-2xx status.
    HttpStatus,
    /// The request was sent but no response arrived.
    NoResponse,
    /// The request was never sent.
    Other,
}

/// An error with an enriched, human-readable message.
///
/// The original error stays available as the `source`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct NormalizedError {
    /// The enriched message.
    pub message: String,
    /// How the failure was classified.
    pub kind: ErrorKind,
    /// The original error.
    #[source]
    pub source: ClientError,
}

/// Normalizes an error, optionally prefixing the message.
///
/// # Example
///
/// ```rust
/// use resource_api::clients::{normalize_error, ErrorKind, HttpError, HttpStatusError};
///
/// let error = HttpError::Status(HttpStatusError {
///     status: 404,
///     url: "https://api.example.com/people/7".to_string(),
///     body: serde_json::json!({"msg": "x"}),
/// });
///
/// let normalized = normalize_error(error, Some("Loading person 7"));
/// assert_eq!(normalized.kind, ErrorKind::HttpStatus);
/// assert_eq!(
///     normalized.message,
///     r#"Loading person 7  Request failed with status code 404: {"msg":"x"}."#
/// );
/// ```
#[must_use]
pub fn normalize_error(error: impl Into<ClientError>, prepend: Option<&str>) -> NormalizedError {
    let source = error.into();

    let mut message = source.to_string();
    if let Some(prepend) = prepend {
        message = format!("{prepend}  {message}");
    }

    let kind = match &source {
        ClientError::Http(HttpError::Status(e)) => {
            message = format!("{message}: {}.", body_text(&e.body));
            ErrorKind::HttpStatus
        }
        ClientError::Http(HttpError::NoResponse(_)) => {
            message.push_str(NO_RESPONSE_SUFFIX);
            ErrorKind::NoResponse
        }
        _ => ErrorKind::Other,
    };

    NormalizedError {
        message,
        kind,
        source,
    }
}

/// Renders a response body as text: strings verbatim, anything else as JSON.
fn body_text(body: &Value) -> String {
    match body {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// Verify NormalizedError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NormalizedError>();
};
