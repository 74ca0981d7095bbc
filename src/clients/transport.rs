//! Authenticated transport for the resource API.
//!
//! This module provides the [`Transport`] type: a `reqwest` client pre-bound
//! to the API base URL, the bearer token and the response-transform pipeline.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::Value;

use crate::auth::AccessToken;
use crate::clients::errors::{HttpError, HttpStatusError, NoResponseError};
use crate::clients::transform::{ResponseTransformer, TransformPipeline};
use crate::config::{ClientConfig, EndpointUrl};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A transport bound to one access token and one base URL.
///
/// Constructing a transport performs no I/O. Only [`Transport::get`] talks to
/// the network.
///
/// # Example
///
/// ```rust
/// use resource_api::{AccessToken, EndpointUrl};
/// use resource_api::clients::Transport;
///
/// let token = AccessToken::new("token-123", "bearer", "");
/// let base_url = EndpointUrl::new("https://api.example.com/v1").unwrap();
/// let transport = Transport::new(&token, base_url, &[], None);
///
/// assert_eq!(
///     transport.default_headers().get("Authorization"),
///     Some(&"Bearer token-123".to_string())
/// );
/// ```
pub struct Transport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every request path is joined onto.
    base_url: EndpointUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Stages applied to every response body.
    pipeline: TransformPipeline,
}

// Verify Transport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Transport>();
};

impl Transport {
    /// Creates a transport for `token` rooted at `base_url`.
    ///
    /// `transformers` run after the built-in JSON parsing stage, in order.
    #[must_use]
    pub fn new(
        token: &AccessToken,
        base_url: EndpointUrl,
        transformers: &[ResponseTransformer],
        user_agent_prefix: Option<&str>,
    ) -> Self {
        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Resource API Client v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", token.value()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url,
            default_headers,
            pipeline: TransformPipeline::new(transformers),
        }
    }

    /// Creates a transport from a client configuration.
    #[must_use]
    pub fn from_config(token: &AccessToken, config: &ClientConfig) -> Self {
        Self::new(
            token,
            config.api_base_url().clone(),
            config.response_transformers(),
            config.user_agent_prefix(),
        )
    }

    /// Returns the base URL for this transport.
    #[must_use]
    pub const fn base_url(&self) -> &EndpointUrl {
        &self.base_url
    }

    /// Returns the default headers for this transport.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the response-transform pipeline.
    #[must_use]
    pub const fn pipeline(&self) -> &TransformPipeline {
        &self.pipeline
    }

    /// Issues a GET for `path` (relative to the base URL, query string included).
    ///
    /// The response body is run through the transform pipeline whether or not
    /// the status is successful.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request could not be built, a
    ///   redirect could not be followed, or the response could not be decoded
    /// - [`HttpError::NoResponse`] if no response arrived, or its body was cut off
    /// - [`HttpError::Status`] for non-2xx responses
    pub async fn get(&self, path: &str) -> Result<Value, HttpError> {
        let url = self.base_url.join(path);
        tracing::debug!("GET {}", url);

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder
            .send()
            .await
            .map_err(|e| HttpError::from_send_error(&url, e))?;

        let status = res.status();
        let body_text = res.text().await.map_err(|source| NoResponseError {
            url: url.clone(),
            source,
        })?;
        let body = self.pipeline.apply(Value::String(body_text));

        if status.is_success() {
            Ok(body)
        } else {
            Err(HttpStatusError {
                status: status.as_u16(),
                url,
                body,
            }
            .into())
        }
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "Bearer *****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("default_headers", &headers)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
