//! High-level client for the resource API.
//!
//! - [`ApiClient`]: Fetches an access token once, then serves `get` requests
//! - [`ReadinessState`]: `Initializing`, `Ready` or `Failed`
//! - [`ClientError`]: Error type for client operations
//!
//! # Lifecycle
//!
//! A client starts out `Initializing`. When the client-credentials token
//! fetch succeeds it moves to `Ready` with a transport bound to that token;
//! when it fails it moves to `Failed`. Either transition happens once.
//!
//! [`ApiClient::connect`] waits for the transition and reports failure
//! directly. [`ApiClient::new`] returns at once and lets `get` report
//! [`ClientError::NotReady`] in the meantime.
//!
//! # Example
//!
//! ```rust,ignore
//! use resource_api::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(config);
//! assert!(client.get("people", None, None).await.is_err()); // not ready yet
//!
//! client.wait_until_ready().await?;
//! let people = client.get("people", None, None).await?;
//! ```

mod client;
mod errors;

pub use client::{ApiClient, ReadinessState};
pub use errors::ClientError;
