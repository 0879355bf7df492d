//! Shared helpers for command implementations.

use fsq_config::Config;
use fsq_query::{MAX_LIMIT, Order, Query};
use thiserror::Error;

use crate::cli::args::RequestArgs;

/// Reasons a search command line cannot become a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Neither keywords nor qualifier flags were given.
    #[error("specify search keywords or qualifier flags")]
    EmptySearch,

    /// The result limit is outside what the API serves.
    #[error("`--limit` must be between 1 and {max}, got {limit}")]
    LimitOutOfRange {
        /// The rejected value.
        limit: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// Pages are numbered from 1.
    #[error("`--page` must be at least 1")]
    PageZero,
}

/// CLI options for request parameters that can override config defaults.
pub struct RequestOverrides {
    /// Maximum results to fetch.
    pub limit: Option<usize>,
    /// Result order.
    pub order: Option<Order>,
    /// Sort field.
    pub sort: Option<String>,
    /// Page number.
    pub page: Option<usize>,
}

impl From<RequestArgs> for RequestOverrides {
    fn from(args: RequestArgs) -> Self {
        Self {
            limit: args.limit,
            order: args.order,
            sort: args.sort,
            page: args.page,
        }
    }
}

impl RequestOverrides {
    /// Fills the query's request parameters from CLI flags, falling back to config defaults.
    ///
    /// Rejects values the API would refuse.
    pub fn apply(self, config: &Config, query: &mut Query) -> Result<(), SearchError> {
        let limit = self.limit.unwrap_or(config.search.limit);
        if limit == 0 || limit > MAX_LIMIT {
            return Err(SearchError::LimitOutOfRange {
                limit,
                max: MAX_LIMIT,
            });
        }
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(SearchError::PageZero);
        }

        query.limit = limit;
        query.page = page;
        query.order = self.order.or(config.search.order);
        query.sort = self
            .sort
            .or_else(|| config.kind(query.kind).sort.clone())
            .unwrap_or_default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fsq_config::{KindSettings, SearchSettings};
    use fsq_query::Kind;

    use super::*;

    fn overrides() -> RequestOverrides {
        RequestOverrides {
            limit: None,
            order: None,
            sort: None,
            page: None,
        }
    }

    fn config() -> Config {
        Config {
            search: SearchSettings {
                limit: 50,
                order: Some(Order::Desc),
            },
            issues: KindSettings {
                sort: Some("comments".into()),
            },
            ..Config::default()
        }
    }

    #[test]
    fn config_defaults_fill_gaps() {
        let mut query = Query::new(Kind::Issues);
        overrides().apply(&config(), &mut query).unwrap();
        assert_eq!(query.limit, 50);
        assert_eq!(query.page, 1);
        assert_eq!(query.order, Some(Order::Desc));
        assert_eq!(query.sort, "comments");
    }

    #[test]
    fn sort_default_is_per_kind() {
        let mut query = Query::new(Kind::Repositories);
        overrides().apply(&config(), &mut query).unwrap();
        assert_eq!(query.sort, "");
    }

    #[test]
    fn flags_win_over_config() {
        let mut query = Query::new(Kind::Issues);
        let flags = RequestOverrides {
            limit: Some(5),
            order: Some(Order::Asc),
            sort: Some("created".into()),
            page: Some(3),
        };
        flags.apply(&config(), &mut query).unwrap();
        assert_eq!(query.limit, 5);
        assert_eq!(query.page, 3);
        assert_eq!(query.order, Some(Order::Asc));
        assert_eq!(query.sort, "created");
    }

    #[test]
    fn limit_out_of_range() {
        for limit in [0, MAX_LIMIT + 1] {
            let mut query = Query::default();
            let flags = RequestOverrides {
                limit: Some(limit),
                ..overrides()
            };
            let err = flags.apply(&Config::default(), &mut query).unwrap_err();
            assert_eq!(
                err,
                SearchError::LimitOutOfRange {
                    limit,
                    max: MAX_LIMIT
                }
            );
            assert!(err.to_string().contains("between 1 and 1000"), "{err}");
        }
    }

    #[test]
    fn page_zero_rejected() {
        let mut query = Query::default();
        let flags = RequestOverrides {
            page: Some(0),
            ..overrides()
        };
        assert_eq!(
            flags.apply(&Config::default(), &mut query),
            Err(SearchError::PageZero)
        );
    }
}
