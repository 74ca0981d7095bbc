//! Resource request construction.
//!
//! This module turns a logical resource query into the relative path and
//! query string sent to the API.
//!
//! - [`ResourceQuery`]: Resource path, optional id, optional [`QueryOptions`]
//! - [`QueryOptions`]: Expansions, extensions, filter and page size
//! - [`Filter`]: A single filter expression or several joined with `;`
//! - [`build_resource_path`]: The path + query string builder
//! - [`filter`]: String helpers for filter operators
//!
//! # Example
//!
//! ```rust
//! use resource_api::rest::{filter, QueryOptions, ResourceQuery};
//!
//! let query = ResourceQuery::new("people").options(
//!     QueryOptions::new()
//!         .expansions(["address"])
//!         .query(vec![filter::eq("status", "active"), filter::gt("age", 21)]),
//! );
//!
//! assert_eq!(
//!     query.to_path(),
//!     "people?expansions=address&pagesize=1000&q=status==active;age=gt=21"
//! );
//! ```

pub mod filter;
mod options;
mod path;

pub use options::{Filter, QueryOptions, DEFAULT_PAGE_SIZE};
pub use path::{build_resource_path, ResourceId, ResourceQuery};
