//! Implementation of `fsq repos`, `fsq issues` and `fsq prs`.

use std::process::ExitCode;

use fsq_query::{Kind, Qualifiers, Query};
use tracing::debug;

use super::shared::{RequestOverrides, SearchError};
use crate::cli::{args::SearchCommand, context::CommandContext, output::print_query};

/// Which search subcommand was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchVariant {
    /// Repository search.
    Repos,
    /// Issue search; restricts results to issues.
    Issues,
    /// Pull request search; restricts results to pull requests.
    Prs,
}

impl SearchVariant {
    /// Returns the API endpoint this variant searches.
    fn kind(self) -> Kind {
        match self {
            Self::Repos => Kind::Repositories,
            Self::Issues | Self::Prs => Kind::Issues,
        }
    }

    /// Returns the `type:` qualifier implied by the subcommand, if any.
    fn implied_type(self) -> Option<&'static str> {
        match self {
            Self::Repos => None,
            Self::Issues => Some("issue"),
            Self::Prs => Some("pr"),
        }
    }
}

/// Builds the query described by the command line.
///
/// An explicit `--type` wins over the type implied by the subcommand.
pub fn build_query(
    ctx: &CommandContext,
    variant: SearchVariant,
    cmd: SearchCommand,
) -> Result<Query, SearchError> {
    let mut qualifiers = Qualifiers::from(cmd.qualifiers);
    if cmd.keywords.is_empty() && qualifiers.is_empty() {
        return Err(SearchError::EmptySearch);
    }
    if qualifiers.type_.is_empty()
        && let Some(t) = variant.implied_type()
    {
        qualifiers.type_ = t.to_string();
    }

    let mut query = Query {
        keywords: cmd.keywords,
        qualifiers,
        ..Query::new(variant.kind())
    };
    RequestOverrides::from(cmd.request).apply(&ctx.config, &mut query)?;
    debug!(?variant, kind = %query.kind, limit = query.limit, "built query");
    Ok(query)
}

/// Serializes the query and prints it.
pub fn run(ctx: &CommandContext, variant: SearchVariant, cmd: SearchCommand) -> ExitCode {
    let json = cmd.json;
    match build_query(ctx, variant, cmd) {
        Ok(query) => print_query(&query, json),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use fsq_config::Config;

    use super::*;
    use crate::cli::args::{Cli, Commands};

    fn ctx() -> CommandContext {
        CommandContext {
            cwd: PathBuf::from("/"),
            config: Config::default(),
        }
    }

    fn build(args: &[&str]) -> Result<Query, SearchError> {
        let cli = Cli::try_parse_from(args).unwrap();
        let (variant, cmd) = match cli.command {
            Commands::Repos(cmd) => (SearchVariant::Repos, cmd),
            Commands::Issues(cmd) => (SearchVariant::Issues, cmd),
            Commands::Prs(cmd) => (SearchVariant::Prs, cmd),
            _ => panic!("expected a search command"),
        };
        build_query(&ctx(), variant, cmd)
    }

    #[test]
    fn repos_query() {
        let q = build(&["fsq", "repos", "cli", "--language", "go", "--stars", ">100"]).unwrap();
        assert_eq!(q.kind, Kind::Repositories);
        assert_eq!(q.to_query_string(), "cli language:go stars:>100");
    }

    #[test]
    fn issues_imply_issue_type() {
        let q = build(&["fsq", "issues", "bug", "--state", "open", "--label", "bug,p1"]).unwrap();
        assert_eq!(q.kind, Kind::Issues);
        assert_eq!(
            q.to_query_string(),
            "bug label:bug label:p1 state:open type:issue"
        );
    }

    #[test]
    fn prs_imply_pr_type() {
        let q = build(&["fsq", "prs", "needs review", "--draft", "true"]).unwrap();
        assert_eq!(q.to_query_string(), "\"needs review\" draft:true type:pr");
    }

    #[test]
    fn explicit_type_wins() {
        let q = build(&["fsq", "issues", "--type", "pr"]).unwrap();
        assert_eq!(q.to_query_string(), "type:pr");
    }

    #[test]
    fn empty_search_rejected() {
        for sub in ["repos", "issues", "prs"] {
            let err = build(&["fsq", sub, "--limit", "10"]).unwrap_err();
            assert_eq!(err, SearchError::EmptySearch, "{sub}");
        }
    }

    #[test]
    fn bad_limit_rejected() {
        assert!(matches!(
            build(&["fsq", "repos", "rust", "-L", "0"]),
            Err(SearchError::LimitOutOfRange { limit: 0, .. })
        ));
        assert_eq!(
            build(&["fsq", "repos", "rust", "--page", "0"]).unwrap_err(),
            SearchError::PageZero
        );
    }
}
