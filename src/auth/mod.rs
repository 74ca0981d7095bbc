//! Authentication for the resource API.
//!
//! # Overview
//!
//! - [`AccessToken`]: The bearer token obtained from the token endpoint
//! - [`oauth`]: The client-credentials grant that obtains it
//!
//! # Example
//!
//! ```rust,ignore
//! use resource_api::auth::oauth::fetch_access_token;
//!
//! let token = fetch_access_token(config.token_endpoint(), config.credentials()).await?;
//! ```

pub mod oauth;
mod token;

pub use token::AccessToken;
