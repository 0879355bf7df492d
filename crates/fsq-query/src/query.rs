//! The top-level search query and its serialized forms.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{QueryError, qualifiers::Qualifiers, quote::quote};

/// Default number of results requested.
pub const DEFAULT_LIMIT: usize = 30;

/// Largest page size the search API accepts.
pub const MAX_PER_PAGE: usize = 100;

/// Largest number of results the search API will return for one query.
pub const MAX_LIMIT: usize = 1000;

/// Which search endpoint a query targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Repository search.
    #[default]
    Repositories,
    /// Issue and pull request search.
    Issues,
}

impl Kind {
    /// Returns the canonical name, which is also the endpoint suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repositories => "repositories",
            Self::Issues => "issues",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "repositories" | "repos" => Ok(Self::Repositories),
            "issues" | "issue" => Ok(Self::Issues),
            _ => Err(QueryError::UnknownKind(s.to_string())),
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl Order {
    /// Returns the API name of this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(QueryError::UnknownOrder(s.to_string())),
        }
    }
}

/// A structured search query.
///
/// Only `keywords` and `qualifiers` make up the query string. `kind`, `limit`, `order`, `page`
/// and `sort` are sent as separate request parameters; see [`Query::request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Free-text terms, in the order the caller gave them.
    pub keywords: Vec<String>,
    /// Search endpoint.
    pub kind: Kind,
    /// Maximum number of results wanted.
    pub limit: usize,
    /// Result ordering, if any.
    pub order: Option<Order>,
    /// Page number, starting at 1.
    pub page: usize,
    /// Filter terms.
    pub qualifiers: Qualifiers,
    /// Sort field; empty for best match.
    pub sort: String,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            kind: Kind::default(),
            limit: DEFAULT_LIMIT,
            order: None,
            page: 1,
            qualifiers: Qualifiers::default(),
            sort: String::new(),
        }
    }
}

impl Query {
    /// Creates an empty query for `kind`.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Renders the `q` string: quoted keywords in order, then sorted qualifier tokens.
    ///
    /// The result is deterministic and is empty when there are no keywords and no qualifiers.
    pub fn to_query_string(&self) -> String {
        let tokens: Vec<String> = self
            .keywords
            .iter()
            .map(|k| quote(k).into_owned())
            .chain(self.qualifiers.tokens())
            .collect();
        let q = tokens.join(" ");
        trace!(kind = %self.kind, tokens = tokens.len(), query = %q, "serialized search query");
        q
    }

    /// Returns the number of results to request per page.
    pub fn per_page(&self) -> usize {
        self.limit.min(MAX_PER_PAGE)
    }

    /// Describes the API request for this query without sending it.
    pub fn request(&self) -> SearchRequest {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page().to_string()),
            ("q", self.to_query_string()),
        ];
        if let Some(order) = self.order {
            params.push(("order", order.to_string()));
        }
        if !self.sort.is_empty() {
            params.push(("sort", self.sort.clone()));
        }
        params.sort_by_key(|(k, _)| *k);

        SearchRequest {
            path: format!("search/{}", self.kind),
            params,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// The endpoint and parameters a client sends for one page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// API path relative to the API root, e.g. `search/issues`.
    pub path: String,
    /// Query parameters sorted by name.
    pub params: Vec<(&'static str, String)>,
}

impl SearchRequest {
    /// Returns the value of a parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}
