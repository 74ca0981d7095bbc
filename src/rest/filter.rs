//! Helpers for writing filter expressions.
//!
//! The API understands `==`, `=gt=`, `=ge=`, `=lt=`, `=le=`, a trailing `*`
//! wildcard, parenthesized value lists and `;` for logical AND. These
//! functions only format strings; the request builder passes filters through
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use resource_api::rest::filter;
//!
//! let q = filter::and([
//!     filter::starts_with("lastName", "Sm"),
//!     filter::ge("age", 18),
//!     filter::in_list("status", ["active", "pending"]),
//! ]);
//!
//! assert_eq!(q, "lastName==Sm*;age=ge=18;status==(active,pending)");
//! ```

use std::fmt::Display;

/// `field==value`
#[must_use]
pub fn eq(field: &str, value: impl Display) -> String {
    format!("{field}=={value}")
}

/// `field=gt=value`
#[must_use]
pub fn gt(field: &str, value: impl Display) -> String {
    format!("{field}=gt={value}")
}

/// `field=ge=value`
#[must_use]
pub fn ge(field: &str, value: impl Display) -> String {
    format!("{field}=ge={value}")
}

/// `field=lt=value`
#[must_use]
pub fn lt(field: &str, value: impl Display) -> String {
    format!("{field}=lt={value}")
}

/// `field=le=value`
#[must_use]
pub fn le(field: &str, value: impl Display) -> String {
    format!("{field}=le={value}")
}

/// `field==prefix*`
#[must_use]
pub fn starts_with(field: &str, prefix: impl Display) -> String {
    format!("{field}=={prefix}*")
}

/// `field==(v1,v2,...)`: matches any of the values.
#[must_use]
pub fn in_list<I, V>(field: &str, values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Display,
{
    let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("{field}==({})", values.join(","))
}

/// Joins expressions with `;`.
#[must_use]
pub fn and<I, S>(expressions: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    expressions
        .into_iter()
        .map(|e| e.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(";")
}
