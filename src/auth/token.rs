//! Access token returned by the client-credentials grant.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// An OAuth2 access token, adopted verbatim from the token endpoint's JSON.
///
/// The wire fields are `access_token`, `token_type` and `expires`. A token is
/// obtained once per [`ApiClient`](crate::ApiClient) and never refreshed.
///
/// # Security
///
/// The `Debug` implementation masks the token value.
///
/// # Example
///
/// ```rust
/// use resource_api::AccessToken;
///
/// let token: AccessToken = serde_json::from_str(
///     r#"{"access_token":"abc","token_type":"bearer","expires":"2030-01-01T00:00:00Z"}"#,
/// ).unwrap();
///
/// assert_eq!(token.value(), "abc");
/// assert!(!format!("{:?}", token).contains("abc"));
/// ```
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    #[serde(rename = "access_token")]
    value: String,
    #[serde(default)]
    token_type: String,
    #[serde(rename = "expires", default)]
    expires_at: String,
}

impl AccessToken {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        token_type: impl Into<String>,
        expires_at: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            token_type: token_type.into(),
            expires_at: expires_at.into(),
        }
    }

    /// Returns the raw token value sent as the bearer credential.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the token type reported by the endpoint (usually `bearer`).
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Returns the expiry exactly as the endpoint reported it.
    #[must_use]
    pub fn expires_at_raw(&self) -> &str {
        &self.expires_at
    }

    /// Parses the expiry as an RFC 3339 timestamp.
    ///
    /// Returns `None` when the endpoint omitted the field or used another format.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expires_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"*****")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// Verify AccessToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
};
