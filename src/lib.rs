//! # Resource API Client
//!
//! A Rust client for REST resource APIs protected by the OAuth 2.0
//! client-credentials grant.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for credentials and endpoint URLs
//! - Client-credentials token acquisition via [`auth::oauth`]
//! - An authenticated transport with a response-transform pipeline
//! - Resource path and query string construction via [`rest`]
//! - An [`ApiClient`] with an explicit `Initializing` / `Ready` / `Failed` lifecycle
//! - Error normalization into a single inspectable shape via [`normalize_error`]
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_api::{ClientConfig, Credentials, EndpointUrl};
//!
//! // Create configuration using the builder pattern
//! let config = ClientConfig::builder()
//!     .credentials(Credentials::from_client_secret("client", "secret").unwrap())
//!     .token_endpoint(EndpointUrl::new("https://auth.example.com/oauth/token").unwrap())
//!     .api_base_url(EndpointUrl::new("https://api.example.com/v1").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Reading Resources
//!
//! ```rust,ignore
//! use resource_api::{ApiClient, ClientConfig, QueryOptions};
//! use resource_api::rest::filter;
//!
//! // Waits for the access token before returning
//! let client = ApiClient::connect(ClientConfig::from_env()?).await?;
//!
//! // GET people/42
//! let person = client.get("people", Some(42.into()), None).await?;
//!
//! // GET people?expansions=address&pagesize=50&q=status==active
//! let options = QueryOptions::new()
//!     .expansions(["address"])
//!     .page_size(50)
//!     .query(filter::eq("status", "active"));
//! let people = client.get("people", None, Some(&options)).await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use resource_api::{normalize_error, ErrorKind};
//!
//! match client.get("people", Some(7.into()), None).await {
//!     Ok(person) => println!("{person}"),
//!     Err(e) => {
//!         let normalized = normalize_error(e, Some("Loading person 7"));
//!         if normalized.kind == ErrorKind::NoResponse {
//!             // retry later
//!         }
//!         eprintln!("{normalized}");
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::AccessToken;
pub use config::{ClientConfig, ClientConfigBuilder, Credentials, EndpointUrl};
pub use error::ConfigError;

// Re-export OAuth types for convenience
pub use auth::oauth::{fetch_access_token, AuthError};

// Re-export client types
pub use clients::{
    normalize_error, ApiClient, ClientError, ErrorKind, HttpError, HttpStatusError,
    NormalizedError, ReadinessState, ResponseTransformer, Transport,
};

// Re-export request construction types
pub use rest::{build_resource_path, Filter, QueryOptions, ResourceId, ResourceQuery};
