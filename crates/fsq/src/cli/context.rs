//! Per-invocation state handed to every command.

use std::{env, path::PathBuf, process::ExitCode};

use fsq_config::Config;

/// Working directory plus the configuration resolved from it.
pub struct CommandContext {
    /// Directory `fsq` was started in; config discovery begins here.
    pub cwd: PathBuf,
    /// Effective settings, or defaults when no `.fsq.toml` applies.
    pub config: Config,
}

impl CommandContext {
    /// Resolves the working directory and loads every applicable config file.
    pub fn load() -> Result<Self, ExitCode> {
        let mut ctx = Self::load_cwd_only()?;
        ctx.config = Config::load(&ctx.cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(ctx)
    }

    /// Resolves the working directory and uses default settings.
    ///
    /// `init` and `qualifiers` go through here so a broken config cannot block them.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }
}
