//! Clap argument definitions for the `fsq` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};
use fsq_query::{Order, Qualifiers, QueryError};

/// Parse a result order from a string.
fn parse_order(s: &str) -> Result<Order, String> {
    s.parse().map_err(|e: QueryError| e.to_string())
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "fsq")]
#[command(about = "Build code-forge search queries from command-line flags")]
pub struct Cli {
    /// Log verbosity (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Qualifier flags. Each flag is named after the query key it sets.
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Qualifiers")]
pub struct QualifierArgs {
    /// Filter on archived state
    #[arg(long, value_name = "BOOL")]
    pub archived: Option<bool>,
    /// Filter by assignee
    #[arg(long, value_name = "LOGIN")]
    pub assignee: Option<String>,
    /// Filter by author
    #[arg(long, value_name = "LOGIN")]
    pub author: Option<String>,
    /// Filter on base branch name
    #[arg(long, value_name = "BRANCH")]
    pub base: Option<String>,
    /// Filter on closed date
    #[arg(long, value_name = "DATE")]
    pub closed: Option<String>,
    /// Filter by commenter
    #[arg(long, value_name = "LOGIN")]
    pub commenter: Option<String>,
    /// Filter on number of comments
    #[arg(long, value_name = "NUMBER")]
    pub comments: Option<String>,
    /// Filter on created date
    #[arg(long, value_name = "DATE")]
    pub created: Option<String>,
    /// Filter on draft state
    #[arg(long, value_name = "BOOL")]
    pub draft: Option<bool>,
    /// Filter on number of followers
    #[arg(long, value_name = "NUMBER")]
    pub followers: Option<String>,
    /// Include forks: true, false or only
    #[arg(long, value_name = "MODE")]
    pub fork: Option<String>,
    /// Filter on number of forks
    #[arg(long, value_name = "NUMBER")]
    pub forks: Option<String>,
    /// Filter on number of issues labeled "good first issue"
    #[arg(long, value_name = "NUMBER")]
    pub good_first_issues: Option<String>,
    /// Filter on head branch name
    #[arg(long, value_name = "BRANCH")]
    pub head: Option<String>,
    /// Filter on number of issues labeled "help wanted"
    #[arg(long, value_name = "NUMBER")]
    pub help_wanted_issues: Option<String>,
    /// Restrict keyword matching to fields (comma-separated or repeated)
    #[arg(long = "in", value_name = "FIELD", value_delimiter = ',')]
    pub in_: Vec<String>,
    /// Filter on number of reactions and comments
    #[arg(long, value_name = "NUMBER")]
    pub interactions: Option<String>,
    /// Filter based on involvement of user
    #[arg(long, value_name = "LOGIN")]
    pub involves: Option<String>,
    /// Filter on state or visibility (comma-separated or repeated)
    #[arg(long, value_name = "VALUE", value_delimiter = ',')]
    pub is: Vec<String>,
    /// Filter on label (comma-separated or repeated)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub label: Vec<String>,
    /// Filter based on the coding language
    #[arg(long, value_name = "LANGUAGE")]
    pub language: Option<String>,
    /// Filter based on license type (comma-separated or repeated)
    #[arg(long, value_name = "LICENSE", value_delimiter = ',')]
    pub license: Vec<String>,
    /// Filter based on user mentions
    #[arg(long, value_name = "LOGIN")]
    pub mentions: Option<String>,
    /// Filter on merged date
    #[arg(long, value_name = "DATE")]
    pub merged: Option<String>,
    /// Filter by milestone title
    #[arg(long, value_name = "TITLE")]
    pub milestone: Option<String>,
    /// Filter on missing metadata (comma-separated or repeated)
    #[arg(long, value_name = "FIELD", value_delimiter = ',')]
    pub no: Vec<String>,
    /// Filter on organization
    #[arg(long, value_name = "ORG")]
    pub org: Option<String>,
    /// Filter on project board
    #[arg(long, value_name = "NUMBER")]
    pub project: Option<String>,
    /// Filter on last pushed date
    #[arg(long, value_name = "DATE")]
    pub pushed: Option<String>,
    /// Filter on number of reactions
    #[arg(long, value_name = "NUMBER")]
    pub reactions: Option<String>,
    /// Filter on repository (comma-separated or repeated)
    #[arg(long, value_name = "OWNER/REPO", value_delimiter = ',')]
    pub repo: Vec<String>,
    /// Filter based on review status
    #[arg(long, value_name = "STATUS")]
    pub review: Option<String>,
    /// Filter on user or team requested to review
    #[arg(long, value_name = "LOGIN")]
    pub review_requested: Option<String>,
    /// Filter on user who reviewed
    #[arg(long, value_name = "LOGIN")]
    pub reviewed_by: Option<String>,
    /// Filter on a size range, in kilobytes
    #[arg(long, value_name = "RANGE")]
    pub size: Option<String>,
    /// Filter on number of stars
    #[arg(long, value_name = "NUMBER")]
    pub stars: Option<String>,
    /// Filter based on state: open or closed
    #[arg(long, value_name = "STATE")]
    pub state: Option<String>,
    /// Filter based on commit status
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,
    /// Filter based on team mentions
    #[arg(long, value_name = "NAME")]
    pub team: Option<String>,
    /// Filter on topic (comma-separated or repeated)
    #[arg(long, value_name = "TOPIC", value_delimiter = ',')]
    pub topic: Vec<String>,
    /// Filter on number of topics
    #[arg(long, value_name = "NUMBER")]
    pub topics: Option<String>,
    /// Filter on result type: issue or pr
    #[arg(long = "type", value_name = "TYPE")]
    pub type_: Option<String>,
    /// Filter on last updated date
    #[arg(long, value_name = "DATE")]
    pub updated: Option<String>,
}

/// Converts an accumulated multi-value flag, treating "never passed" as unset.
fn list(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}

impl From<QualifierArgs> for Qualifiers {
    fn from(args: QualifierArgs) -> Self {
        Self {
            archived: args.archived,
            assignee: args.assignee.unwrap_or_default(),
            author: args.author.unwrap_or_default(),
            base: args.base.unwrap_or_default(),
            closed: args.closed.unwrap_or_default(),
            commenter: args.commenter.unwrap_or_default(),
            comments: args.comments.unwrap_or_default(),
            created: args.created.unwrap_or_default(),
            draft: args.draft,
            followers: args.followers.unwrap_or_default(),
            fork: args.fork.unwrap_or_default(),
            forks: args.forks.unwrap_or_default(),
            good_first_issues: args.good_first_issues.unwrap_or_default(),
            head: args.head.unwrap_or_default(),
            help_wanted_issues: args.help_wanted_issues.unwrap_or_default(),
            in_: list(args.in_),
            interactions: args.interactions.unwrap_or_default(),
            involves: args.involves.unwrap_or_default(),
            is: list(args.is),
            label: list(args.label),
            language: args.language.unwrap_or_default(),
            license: list(args.license),
            mentions: args.mentions.unwrap_or_default(),
            merged: args.merged.unwrap_or_default(),
            milestone: args.milestone.unwrap_or_default(),
            no: list(args.no),
            org: args.org.unwrap_or_default(),
            project: args.project.unwrap_or_default(),
            pushed: args.pushed.unwrap_or_default(),
            reactions: args.reactions.unwrap_or_default(),
            repo: list(args.repo),
            review: args.review.unwrap_or_default(),
            review_requested: args.review_requested.unwrap_or_default(),
            reviewed_by: args.reviewed_by.unwrap_or_default(),
            size: args.size.unwrap_or_default(),
            stars: args.stars.unwrap_or_default(),
            state: args.state.unwrap_or_default(),
            status: args.status.unwrap_or_default(),
            team: args.team.unwrap_or_default(),
            topic: list(args.topic),
            topics: args.topics.unwrap_or_default(),
            type_: args.type_.unwrap_or_default(),
            updated: args.updated.unwrap_or_default(),
        }
    }
}

/// Flags for the request parameters sent beside the query string.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Maximum number of results to fetch, 1 to 1000 [default: 30]
    #[arg(short = 'L', long)]
    pub limit: Option<usize>,

    /// Order of results: asc or desc
    #[arg(long, value_parser = parse_order)]
    pub order: Option<Order>,

    /// Sort field (e.g. stars, forks, updated, comments, created)
    #[arg(long)]
    pub sort: Option<String>,

    /// Page of results to request [default: 1]
    #[arg(long)]
    pub page: Option<usize>,
}

/// Arguments shared by `fsq repos`, `fsq issues` and `fsq prs`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Free-text search keywords
    pub keywords: Vec<String>,

    /// Print the full request (path, parameters, qualifiers) as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Request parameter overrides.
    pub request: RequestArgs,

    #[command(flatten)]
    /// Qualifier flags.
    pub qualifiers: QualifierArgs,
}

/// Arguments for `fsq init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.fsq.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `fsq qualifiers`.
#[derive(Args, Debug, Clone)]
pub struct QualifiersCommand {
    /// Only show these query keys (e.g. `label review-requested`)
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,
}

/// Supported `fsq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build a repository search query
    #[command(after_help = "\
EXAMPLES:
  fsq repos cli --language go --stars '>100'
  fsq repos --topic rust,cli --archived false
  fsq repos 'static site' --sort stars --order desc --json")]
    Repos(SearchCommand),

    /// Build an issue search query
    #[command(after_help = "\
EXAMPLES:
  fsq issues crash --repo cli/cli --state open
  fsq issues --label bug --label p1 --author octocat")]
    Issues(SearchCommand),

    /// Build a pull request search query
    #[command(after_help = "\
EXAMPLES:
  fsq prs --review-requested @me --state open
  fsq prs 'needs review' --draft true")]
    Prs(SearchCommand),

    /// List qualifiers with their query keys and value shapes
    Qualifiers(QualifiersCommand),

    /// Initialize fsq configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
