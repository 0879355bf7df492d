//! Command implementations and dispatch.

pub mod config;
pub mod init;
pub mod qualifiers;
pub mod search;
mod shared;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};
use search::SearchVariant;

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Repos(cmd) => search::run(ctx, SearchVariant::Repos, cmd),
        Commands::Issues(cmd) => search::run(ctx, SearchVariant::Issues, cmd),
        Commands::Prs(cmd) => search::run(ctx, SearchVariant::Prs, cmd),
        Commands::Qualifiers(cmd) => qualifiers::run(&cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
