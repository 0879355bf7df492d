//! Implementation of `fsq init`.

use std::{fs, path::PathBuf, process::ExitCode};

use fsq_config::{
    CONFIG_FILENAME, ConfigError, global_config_path, global_template, local_template,
    require_global_config_path,
};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a commented template to `.fsq.toml` in the working directory or home.
///
/// Running in the home directory writes the global template even without `--global`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let in_home = global_config_path()
        .as_deref()
        .and_then(|p| p.parent())
        .is_some_and(|home| home == ctx.cwd);
    let global = cmd.global || in_home;

    let target = match target_path(ctx, global) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if target.exists() && !cmd.force {
        eprintln!("error: {} already exists (use --force to overwrite)", target.display());
        return ExitCode::FAILURE;
    }

    let body = if global { global_template() } else { local_template() };
    match fs::write(&target, body) {
        Ok(()) => {
            println!("Created {}", target.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write {}: {e}", target.display());
            ExitCode::FAILURE
        }
    }
}

/// Where the new config file goes.
fn target_path(ctx: &CommandContext, global: bool) -> Result<PathBuf, ConfigError> {
    if global {
        require_global_config_path()
    } else {
        Ok(ctx.cwd.join(CONFIG_FILENAME))
    }
}
