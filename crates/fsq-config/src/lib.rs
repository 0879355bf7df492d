//! Configuration system for fsq.
//!
//! fsq uses TOML configuration files named `.fsq.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.fsq.toml` files
//! found, then loading `~/.fsq.toml` as the global config with lowest precedence.
//!
//! Configuration only supplies defaults for the request parameters that travel beside the query
//! string (limit, order, sort). It never adds qualifiers.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config,
    require_global_config_path,
};
pub use error::ConfigError;
use fsq_query::{DEFAULT_LIMIT, Kind, Order};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawKindSettings, RawSearchSettings, parse_config_file, parse_config_str,
};
use serde::Serialize;
pub use templates::{global_template, local_template};

/// Top-level merged configuration for fsq.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    /// Shared search defaults.
    pub search: SearchSettings,
    /// Defaults for repository searches.
    pub repositories: KindSettings,
    /// Defaults for issue and pull request searches.
    pub issues: KindSettings,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.fsq.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns the per-kind settings for `kind`.
    pub fn kind(&self, kind: Kind) -> &KindSettings {
        match kind {
            Kind::Repositories => &self.repositories,
            Kind::Issues => &self.issues,
        }
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Unset optional values are omitted.
    pub fn settings_to_toml(&self) -> String {
        toml::to_string_pretty(self).expect("settings serialization should not fail")
    }
}

/// Shared `[search]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSettings {
    /// Results to request when no limit is given.
    pub limit: usize,
    /// Default result order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            order: None,
        }
    }
}

/// Per-kind settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KindSettings {
    /// Default sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_search_settings_defaults() {
        let search = SearchSettings::default();
        assert_eq!(search.limit, 30);
        assert!(search.order.is_none());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.repositories.sort.is_none());
        assert!(config.issues.sort.is_none());
    }

    #[test]
    fn test_kind_lookup() {
        let config = Config {
            issues: KindSettings {
                sort: Some("comments".into()),
            },
            ..Config::default()
        };
        assert_eq!(config.kind(Kind::Issues).sort.as_deref(), Some("comments"));
        assert!(config.kind(Kind::Repositories).sort.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config {
            search: SearchSettings {
                limit: 50,
                order: Some(Order::Desc),
            },
            repositories: KindSettings {
                sort: Some("stars".into()),
            },
            ..Config::default()
        };
        let toml = config.settings_to_toml();

        assert!(toml.contains("[search]"));
        assert!(toml.contains("limit = 50"));
        assert!(toml.contains("order = \"desc\""));
        assert!(toml.contains("sort = \"stars\""));

        let parsed = parse_config_str(&toml, Path::new("effective.toml")).unwrap();
        assert_eq!(parsed.search.unwrap().limit, Some(50));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TestDir::new();
        let outer = dir.create_config_with_content("", "[search]\nlimit = 5\norder = \"asc\"\n");
        let inner = dir.create_config_with_content("proj", "[search]\nlimit = 7\n");

        let config = Config::load_from_files(&[inner, outer]).unwrap();
        assert_eq!(config.search.limit, 7);
        assert_eq!(config.search.order, Some(Order::Asc));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = TestDir::new();
        let missing = dir.path().join("nope.toml");
        let err = Config::load_from_files(&[missing]).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
