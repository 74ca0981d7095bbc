//! Configuration types for the resource API client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: Everything an [`ApiClient`](crate::ApiClient) needs at construction
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`Credentials`]: Pre-encoded client credentials with masked debug output
//! - [`EndpointUrl`]: A validated absolute URL
//!
//! # Example
//!
//! ```rust
//! use resource_api::{ClientConfig, Credentials, EndpointUrl};
//!
//! let config = ClientConfig::builder()
//!     .credentials(Credentials::new("Y2xpZW50OnNlY3JldA==").unwrap())
//!     .token_endpoint(EndpointUrl::new("https://auth.example.com/oauth/token").unwrap())
//!     .api_base_url(EndpointUrl::new("https://api.example.com/v1").unwrap())
//!     .response_transformer(|body| body)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.response_transformers().len(), 1);
//! ```

mod newtypes;

pub use newtypes::{Credentials, EndpointUrl};

use std::fmt;
use std::sync::Arc;

use crate::clients::ResponseTransformer;
use crate::error::ConfigError;

/// Environment variable holding the pre-encoded credentials.
pub const ENV_CREDENTIALS: &str = "RESOURCE_API_CREDENTIALS";
/// Environment variable holding the token endpoint URL.
pub const ENV_TOKEN_URL: &str = "RESOURCE_API_TOKEN_URL";
/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "RESOURCE_API_BASE_URL";
/// Optional environment variable holding the User-Agent prefix.
pub const ENV_USER_AGENT_PREFIX: &str = "RESOURCE_API_USER_AGENT_PREFIX";

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// Immutable once built. Cloning is cheap for the transformer list, which is
/// shared behind `Arc`s.
#[derive(Clone)]
pub struct ClientConfig {
    credentials: Credentials,
    token_endpoint: EndpointUrl,
    api_base_url: EndpointUrl,
    response_transformers: Vec<ResponseTransformer>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Loads a configuration from the process environment.
    ///
    /// Reads [`ENV_CREDENTIALS`], [`ENV_TOKEN_URL`] and [`ENV_BASE_URL`], plus
    /// the optional [`ENV_USER_AGENT_PREFIX`]. Response transformers cannot be
    /// expressed in the environment; use [`ClientConfig::builder`] for those.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is unset,
    /// or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingEnvVar { name })
        };

        let mut builder = Self::builder()
            .credentials(Credentials::new(required(ENV_CREDENTIALS)?)?)
            .token_endpoint(EndpointUrl::new(required(ENV_TOKEN_URL)?)?)
            .api_base_url(EndpointUrl::new(required(ENV_BASE_URL)?)?);
        if let Some(prefix) = lookup(ENV_USER_AGENT_PREFIX).filter(|p| !p.is_empty()) {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build()
    }

    /// Returns the token endpoint credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the token endpoint URL.
    #[must_use]
    pub const fn token_endpoint(&self) -> &EndpointUrl {
        &self.token_endpoint
    }

    /// Returns the base URL all resource paths are relative to.
    #[must_use]
    pub const fn api_base_url(&self) -> &EndpointUrl {
        &self.api_base_url
    }

    /// Returns the caller-supplied response transformers, in application order.
    #[must_use]
    pub fn response_transformers(&self) -> &[ResponseTransformer] {
        &self.response_transformers
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credentials", &self.credentials)
            .field("token_endpoint", &self.token_endpoint)
            .field("api_base_url", &self.api_base_url)
            .field("response_transformers", &self.response_transformers.len())
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `credentials`, `token_endpoint` and `api_base_url`.
#[derive(Default)]
pub struct ClientConfigBuilder {
    credentials: Option<Credentials>,
    token_endpoint: Option<EndpointUrl>,
    api_base_url: Option<EndpointUrl>,
    response_transformers: Vec<ResponseTransformer>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token endpoint credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the token endpoint URL (required).
    #[must_use]
    pub fn token_endpoint(mut self, url: EndpointUrl) -> Self {
        self.token_endpoint = Some(url);
        self
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_base_url(mut self, url: EndpointUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Appends a response transformer.
    ///
    /// Transformers run after the built-in JSON parsing stage, in the order
    /// they were added. Each one receives the previous stage's output.
    #[must_use]
    pub fn response_transformer<F>(mut self, transformer: F) -> Self
    where
        F: Fn(serde_json::Value) -> serde_json::Value + Send + Sync + 'static,
    {
        self.response_transformers.push(Arc::new(transformer));
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `credentials`,
    /// `token_endpoint` or `api_base_url` are not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;
        let token_endpoint = self
            .token_endpoint
            .ok_or(ConfigError::MissingRequiredField {
                field: "token_endpoint",
            })?;
        let api_base_url = self
            .api_base_url
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_base_url",
            })?;

        Ok(ClientConfig {
            credentials,
            token_endpoint,
            api_base_url,
            response_transformers: self.response_transformers,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

impl fmt::Debug for ClientConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfigBuilder")
            .field("credentials", &self.credentials)
            .field("token_endpoint", &self.token_endpoint)
            .field("api_base_url", &self.api_base_url)
            .field("response_transformers", &self.response_transformers.len())
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn complete_builder() -> ClientConfigBuilder {
        ClientConfig::builder()
            .credentials(Credentials::new("encoded").unwrap())
            .token_endpoint(EndpointUrl::new("https://auth.example.com/token").unwrap())
            .api_base_url(EndpointUrl::new("https://api.example.com").unwrap())
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = ClientConfigBuilder::new()
            .token_endpoint(EndpointUrl::new("https://auth.example.com/token").unwrap())
            .api_base_url(EndpointUrl::new("https://api.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_requires_token_endpoint() {
        let result = ClientConfigBuilder::new()
            .credentials(Credentials::new("encoded").unwrap())
            .api_base_url(EndpointUrl::new("https://api.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "token_endpoint"
            })
        ));
    }

    #[test]
    fn test_builder_requires_api_base_url() {
        let result = ClientConfigBuilder::new()
            .credentials(Credentials::new("encoded").unwrap())
            .token_endpoint(EndpointUrl::new("https://auth.example.com/token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_base_url"
            })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = complete_builder().build().unwrap();

        assert!(config.response_transformers().is_empty());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.api_base_url().as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_transformers_keep_insertion_order() {
        let config = complete_builder()
            .response_transformer(|_| serde_json::json!(1))
            .response_transformer(|_| serde_json::json!(2))
            .build()
            .unwrap();

        let outputs: Vec<_> = config
            .response_transformers()
            .iter()
            .map(|t| t(serde_json::Value::Null))
            .collect();
        assert_eq!(outputs, vec![serde_json::json!(1), serde_json::json!(2)]);
    }

    #[test]
    fn test_debug_masks_credentials() {
        let config = complete_builder().build().unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("ClientConfig"));
        assert!(debug_str.contains("Credentials(*****)"));
        assert!(!debug_str.contains("encoded"));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let vars: HashMap<&str, &str> = [
            (ENV_CREDENTIALS, "encoded"),
            (ENV_TOKEN_URL, "https://auth.example.com/token"),
            (ENV_BASE_URL, "https://api.example.com/v1"),
            (ENV_USER_AGENT_PREFIX, "Importer/2.0"),
        ]
        .into_iter()
        .collect();

        let config =
            ClientConfig::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();

        assert_eq!(config.credentials().as_ref(), "encoded");
        assert_eq!(
            config.token_endpoint().as_ref(),
            "https://auth.example.com/token"
        );
        assert_eq!(config.api_base_url().as_ref(), "https://api.example.com/v1");
        assert_eq!(config.user_agent_prefix(), Some("Importer/2.0"));
    }

    #[test]
    fn test_from_lookup_reports_missing_variable() {
        let result = ClientConfig::from_lookup(|name| {
            (name == ENV_CREDENTIALS).then(|| "encoded".to_string())
        });

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingEnvVar {
                name: ENV_TOKEN_URL
            }
        );
    }

    #[test]
    fn test_from_lookup_validates_urls() {
        let result = ClientConfig::from_lookup(|name| {
            Some(match name {
                ENV_TOKEN_URL => "not-a-url".to_string(),
                _ => "https://example.com".to_string(),
            })
        });

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientConfig>();
    }
}
