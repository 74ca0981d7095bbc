//! OAuth 2.0 Client Credentials Grant.
//!
//! The client authenticates with its own pre-encoded credentials (no end
//! user) and receives a bearer token for the resource API.
//!
//! # Wire contract
//!
//! ```text
//! POST <token_endpoint>
//! Authorization: Basic <credentials>
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=client_credentials
//! ```
//!
//! A 2xx response must carry `{ "access_token", "token_type", "expires" }`.
//!
//! # Example
//!
//! ```rust,ignore
//! use resource_api::{Credentials, EndpointUrl};
//! use resource_api::auth::oauth::fetch_access_token;
//!
//! let endpoint = EndpointUrl::new("https://auth.example.com/oauth/token").unwrap();
//! let credentials = Credentials::from_client_secret("client", "secret").unwrap();
//!
//! let token = fetch_access_token(&endpoint, &credentials).await?;
//! println!("Token type: {}", token.token_type());
//! ```

use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::auth::oauth::AuthError;
use crate::auth::AccessToken;
use crate::config::{Credentials, EndpointUrl};

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Performs a single client-credentials token request.
///
/// There is no retry: one POST is issued and its outcome returned.
///
/// # Errors
///
/// - [`AuthError::TokenRequestFailed`] with status `0` if no complete response arrived
/// - [`AuthError::TokenRequestFailed`] with the status code for non-2xx responses
/// - [`AuthError::InvalidTokenResponse`] if a 2xx body is not a valid token
pub async fn fetch_access_token(
    token_endpoint: &EndpointUrl,
    credentials: &Credentials,
) -> Result<AccessToken, AuthError> {
    tracing::debug!("Requesting access token from {}", token_endpoint);

    let client = reqwest::Client::new();
    let response = client
        .post(token_endpoint.as_ref())
        .header(AUTHORIZATION, format!("Basic {}", credentials.as_ref()))
        .header(ACCEPT, "application/json")
        .form(&[("grant_type", CLIENT_CREDENTIALS_GRANT_TYPE)])
        .send()
        .await
        .map_err(|e| AuthError::TokenRequestFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::TokenRequestFailed {
            status: 0,
            message: format!("Network error while reading response: {e}"),
        })?;

    if !status.is_success() {
        return Err(AuthError::TokenRequestFailed {
            status: status.as_u16(),
            message: body,
        });
    }

    serde_json::from_str(&body).map_err(|e| AuthError::InvalidTokenResponse {
        message: format!("Failed to parse token response: {e}"),
    })
}
