//! Query options for resource requests.

/// Page size used when options are supplied without one.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// A filter for the `q` query parameter.
///
/// The expressions are opaque strings; nothing is validated. A malformed
/// filter surfaces only as an error response from the API.
///
/// # Example
///
/// ```rust
/// use resource_api::rest::Filter;
///
/// assert_eq!(Filter::from("a==1").to_query_value().as_deref(), Some("a==1"));
/// assert_eq!(
///     Filter::from(vec!["a==1", "b==2"]).to_query_value().as_deref(),
///     Some("a==1;b==2")
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// A single expression, used as-is.
    Expression(String),
    /// Several expressions combined with `;` (logical AND).
    AllOf(Vec<String>),
}

impl Filter {
    /// Returns the value for the `q` parameter, or `None` if it is omitted.
    ///
    /// An empty single expression is omitted. An empty `AllOf` list still
    /// produces an empty `q=` parameter.
    #[must_use]
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Expression(expr) if expr.is_empty() => None,
            Self::Expression(expr) => Some(expr.clone()),
            Self::AllOf(exprs) => Some(exprs.join(";")),
        }
    }
}

impl From<&str> for Filter {
    fn from(expr: &str) -> Self {
        Self::Expression(expr.to_string())
    }
}

impl From<String> for Filter {
    fn from(expr: String) -> Self {
        Self::Expression(expr)
    }
}

impl From<Vec<String>> for Filter {
    fn from(exprs: Vec<String>) -> Self {
        Self::AllOf(exprs)
    }
}

impl From<Vec<&str>> for Filter {
    fn from(exprs: Vec<&str>) -> Self {
        Self::AllOf(exprs.into_iter().map(String::from).collect())
    }
}

/// Optional parts of a resource request.
///
/// Supplying any `QueryOptions` at all (even an empty one) makes the request
/// carry a query string with at least `pagesize`. Omitting the options
/// entirely sends no query string.
///
/// # Example
///
/// ```rust
/// use resource_api::rest::QueryOptions;
///
/// let options = QueryOptions::new()
///     .expansions(["address", "phones"])
///     .page_size(50)
///     .query("status==active");
///
/// assert_eq!(
///     options.to_query_string(),
///     "expansions=address,phones&pagesize=50&q=status==active"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Named field sets the API should include.
    pub expansions: Option<Vec<String>>,
    /// Named database-extension field sets the API should include.
    pub extensions: Option<Vec<String>>,
    /// Filter expression(s) for the `q` parameter.
    pub query: Option<Filter>,
    /// Page size; [`DEFAULT_PAGE_SIZE`] when unset or zero.
    pub page_size: Option<u32>,
}

impl QueryOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expansions.
    #[must_use]
    pub fn expansions<I, S>(mut self, expansions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expansions = Some(expansions.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the extensions.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the filter.
    #[must_use]
    pub fn query(mut self, filter: impl Into<Filter>) -> Self {
        self.query = Some(filter.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Returns the page size that will be sent.
    #[must_use]
    pub fn effective_page_size(&self) -> u32 {
        self.page_size
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Renders the query string, without the leading `?`.
    ///
    /// Components appear in a fixed order: `expansions`, `extensions`,
    /// `pagesize`, `q`. Values are not percent-encoded here.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::with_capacity(4);

        if let Some(expansions) = &self.expansions {
            params.push(format!("expansions={}", expansions.join(",")));
        }
        if let Some(extensions) = &self.extensions {
            params.push(format!("extensions={}", extensions.join(",")));
        }
        params.push(format!("pagesize={}", self.effective_page_size()));
        if let Some(q) = self.query.as_ref().and_then(Filter::to_query_value) {
            params.push(format!("q={q}"));
        }

        params.join("&")
    }
}
