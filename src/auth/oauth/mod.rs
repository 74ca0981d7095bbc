//! OAuth 2.0 client-credentials support.
//!
//! - [`fetch_access_token`]: one-shot token acquisition from a credentials endpoint
//! - [`AuthError`]: everything that can go wrong while doing so
//!
//! Tokens are fetched once per client lifetime. There is no refresh-before-expiry
//! scheduling and no retry.

mod client_credentials;
mod error;

pub use client_credentials::fetch_access_token;
pub use error::AuthError;
