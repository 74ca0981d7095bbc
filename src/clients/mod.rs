//! HTTP layer for the resource API.
//!
//! # Overview
//!
//! - [`Transport`]: Base URL + bearer token + response-transform pipeline
//! - [`TransformPipeline`]: JSON parsing followed by caller-supplied transformers
//! - [`HttpError`]: Status, no-response and invalid-request failures
//! - [`normalize_error`]: Folds any client error into a [`NormalizedError`]
//! - [`api::ApiClient`]: The orchestrating client most callers want
//!
//! # Example
//!
//! ```rust,ignore
//! use resource_api::clients::{normalize_error, ApiClient};
//!
//! let client = ApiClient::connect(config).await?;
//! match client.get("people", Some(7.into()), None).await {
//!     Ok(person) => println!("{person}"),
//!     Err(e) => eprintln!("{}", normalize_error(e, Some("Loading person 7"))),
//! }
//! ```

pub mod api;
mod errors;
mod normalize;
mod transform;
mod transport;

pub use errors::{HttpError, HttpStatusError, InvalidRequestError, NoResponseError};
pub use normalize::{normalize_error, ErrorKind, NormalizedError, NO_RESPONSE_SUFFIX};
pub use transform::{parse_json_body, ResponseTransformer, TransformPipeline};
pub use transport::{Transport, SDK_VERSION};

// Re-export client types at the clients module level
pub use api::{ApiClient, ClientError, ReadinessState};
