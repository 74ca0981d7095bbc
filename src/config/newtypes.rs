//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

/// Pre-encoded client credentials for the token endpoint.
///
/// The value is sent verbatim as `Authorization: Basic <credentials>`, so it
/// is normally the base64 encoding of `client_id:client_secret`.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `Credentials(*****)`.
///
/// # Example
///
/// ```rust
/// use resource_api::Credentials;
///
/// let credentials = Credentials::new("Y2xpZW50OnNlY3JldA==").unwrap();
/// assert_eq!(credentials.as_ref(), "Y2xpZW50OnNlY3JldA==");
/// assert_eq!(format!("{:?}", credentials), "Credentials(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    /// Wraps an already-encoded credentials string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredentials`] if the value is empty.
    pub fn new(encoded: impl Into<String>) -> Result<Self, ConfigError> {
        let encoded = encoded.into();
        if encoded.trim().is_empty() {
            return Err(ConfigError::EmptyCredentials);
        }
        Ok(Self(encoded))
    }

    /// Encodes a client id and secret as `base64(client_id:client_secret)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredentials`] if either part is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_api::Credentials;
    ///
    /// let credentials = Credentials::from_client_secret("client", "secret").unwrap();
    /// assert_eq!(credentials.as_ref(), "Y2xpZW50OnNlY3JldA==");
    /// ```
    pub fn from_client_secret(client_id: &str, client_secret: &str) -> Result<Self, ConfigError> {
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(ConfigError::EmptyCredentials);
        }
        Ok(Self(STANDARD.encode(format!("{client_id}:{client_secret}"))))
    }
}

impl AsRef<str> for Credentials {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(*****)")
    }
}

/// A validated absolute URL, used for the token endpoint and API base URL.
///
/// Only the scheme and host are checked; the path is kept as given so that
/// base URLs like `https://api.example.com/v1` work.
///
/// # Example
///
/// ```rust
/// use resource_api::EndpointUrl;
///
/// let url = EndpointUrl::new("https://api.example.com/v1").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl EndpointUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the scheme or host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start || url[host_start..host_end].contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative path onto this URL with exactly one `/` between them.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
