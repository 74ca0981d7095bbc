//! Resource path construction.
//!
//! Turns a logical resource query into the relative path and query string
//! that the transport requests:
//!
//! ```text
//! <resource_path>[/<id>][?[expansions=..&][extensions=..&]pagesize=<n>[&q=<filter>]]
//! ```
//!
//! # Example
//!
//! ```rust
//! use resource_api::rest::{build_resource_path, QueryOptions, ResourceId};
//!
//! assert_eq!(build_resource_path("people", None, None), "people");
//! assert_eq!(
//!     build_resource_path("people", Some(&ResourceId::from(42)), Some(&QueryOptions::new())),
//!     "people/42?pagesize=1000"
//! );
//! ```

use std::fmt;

use crate::rest::QueryOptions;

/// Identifier of a single resource.
///
/// Zero and the empty string count as "no id": they add no path segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// A numeric id.
    Number(i64),
    /// A textual id.
    Text(String),
}

impl ResourceId {
    /// Returns the path segment for this id, or `None` if it adds none.
    #[must_use]
    pub fn as_segment(&self) -> Option<String> {
        match self {
            Self::Number(0) => None,
            Self::Text(text) if text.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Builds the relative request path for a resource.
///
/// - A present id (see [`ResourceId::as_segment`]) is appended as `/<id>`.
/// - With `options` supplied, a query string always follows, carrying at
///   least `pagesize`.
/// - With no `options`, nothing is appended: not even the default page size.
#[must_use]
pub fn build_resource_path(
    resource_path: &str,
    id: Option<&ResourceId>,
    options: Option<&QueryOptions>,
) -> String {
    let mut path = resource_path.to_string();

    if let Some(segment) = id.and_then(ResourceId::as_segment) {
        path.push('/');
        path.push_str(&segment);
    }

    if let Some(options) = options {
        path.push('?');
        path.push_str(&options.to_query_string());
    }

    path
}

/// A complete logical resource query.
///
/// # Example
///
/// ```rust
/// use resource_api::rest::{QueryOptions, ResourceQuery};
///
/// let query = ResourceQuery::new("people")
///     .id(7)
///     .options(QueryOptions::new().expansions(["address"]));
///
/// assert_eq!(query.to_path(), "people/7?expansions=address&pagesize=1000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceQuery {
    /// Path of the resource collection, relative to the API base URL.
    pub resource_path: String,
    /// Optional single-resource id.
    pub id: Option<ResourceId>,
    /// Optional query options.
    pub options: Option<QueryOptions>,
}

impl ResourceQuery {
    /// Creates a query for a resource collection.
    #[must_use]
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            id: None,
            options: None,
        }
    }

    /// Targets a single resource.
    #[must_use]
    pub fn id(mut self, id: impl Into<ResourceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attaches query options.
    #[must_use]
    pub fn options(mut self, options: QueryOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Renders the relative request path.
    #[must_use]
    pub fn to_path(&self) -> String {
        build_resource_path(
            &self.resource_path,
            self.id.as_ref(),
            self.options.as_ref(),
        )
    }
}
