//! Command-line interface for `fsq`, the forge search query builder.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
    logging::init_logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = match &cli.command {
        Commands::Init(_) | Commands::Qualifiers(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
