//! Search query model and serializer for fsq.
//!
//! A [`Query`] holds free-text keywords and a fixed set of [`Qualifiers`]. Serializing it
//! produces the `q` string a code-forge search API expects:
//!
//! - **Keywords** come first, in the order given.
//! - **Qualifiers** follow as `key:value` tokens, sorted lexicographically.
//! - **Quoting**: a value is wrapped in double quotes only if it contains whitespace or a
//!   double quote.
//!
//! Pagination and sorting (`limit`, `page`, `order`, `sort`) are not part of the string; they
//! travel as separate parameters, see [`Query::request`].
//!
//! # Example
//!
//! ```
//! use fsq_query::{Qualifiers, Query};
//!
//! let query = Query {
//!     keywords: vec!["needs review".into()],
//!     qualifiers: Qualifiers {
//!         draft: Some(true),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert_eq!(query.to_query_string(), r#""needs review" draft:true"#);
//! ```

#![warn(missing_docs)]

mod error;
mod qualifiers;
mod query;
mod quote;

pub use error::QueryError;
pub use qualifiers::{
    FieldShape, FieldValue, QUALIFIER_FIELDS, QualifierField, Qualifiers, field_by_key,
};
pub use query::{
    DEFAULT_LIMIT, Kind, MAX_LIMIT, MAX_PER_PAGE, Order, Query, SearchRequest,
};
pub use quote::{needs_quoting, quote};
