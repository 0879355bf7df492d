//! Error types for the query model.
//!
//! Serialization itself cannot fail. These errors cover converting user-facing names into the
//! typed pieces of a query.

use thiserror::Error;

/// Errors raised when parsing query metadata from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The search kind is not one the API knows about.
    #[error("unknown search kind '{0}' (expected repositories or issues)")]
    UnknownKind(String),

    /// The sort order is neither ascending nor descending.
    #[error("unknown sort order '{0}' (expected asc or desc)")]
    UnknownOrder(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_display() {
        let err = QueryError::UnknownKind("commits".into());
        let display = err.to_string();
        assert!(display.contains("'commits'"));
        assert!(display.contains("repositories or issues"));
    }

    #[test]
    fn unknown_order_display() {
        let err = QueryError::UnknownOrder("up".into());
        assert_eq!(
            err.to_string(),
            "unknown sort order 'up' (expected asc or desc)"
        );
    }
}
