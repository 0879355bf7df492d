//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and validating values.

use std::path::{Path, PathBuf};

use fsq_query::MAX_LIMIT;
use tracing::debug;

use crate::{
    Config, ConfigError, KindSettings, SearchSettings,
    parse::{RawConfig, RawKindSettings, RawSearchSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). Each setting takes the first defined value.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut search = SearchSettings::default();
    let mut repositories = KindSettings::default();
    let mut issues = KindSettings::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref s) = raw.search {
            apply_raw_search(&mut search, s, &parsed.path)?;
        }
        if let Some(ref k) = raw.repositories {
            apply_raw_kind(&mut repositories, k);
        }
        if let Some(ref k) = raw.issues {
            apply_raw_kind(&mut issues, k);
        }
    }

    debug!(files = configs.len(), ?search, "merged configuration");

    Ok(Config {
        search,
        repositories,
        issues,
    })
}

/// Applies a raw `[search]` section, validating each value against its source file.
fn apply_raw_search(
    result: &mut SearchSettings,
    raw: &RawSearchSettings,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(limit) = raw.limit {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(ConfigError::InvalidLimit {
                path: path.to_path_buf(),
                limit,
                max: MAX_LIMIT,
            });
        }
        result.limit = limit;
    }
    if let Some(ref order) = raw.order {
        let order = order.parse().map_err(|source| ConfigError::InvalidOrder {
            path: path.to_path_buf(),
            source,
        })?;
        result.order = Some(order);
    }
    Ok(())
}

/// Applies a raw per-kind section.
fn apply_raw_kind(result: &mut KindSettings, raw: &RawKindSettings) {
    if let Some(ref sort) = raw.sort {
        result.sort = Some(sort.clone());
    }
}
