//! Runtime configuration
//!
//! Query parameters and the snapshot location, loadable from a YAML file.
//! Every field has a default, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Scalar parameters of the parameterised queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Photos returned by the most-tagged query
    pub top_photos: usize,
    /// Pairs returned by the match maker
    pub match_pairs: usize,
    /// Largest birth year difference for a match
    pub match_year_diff: u32,
    /// Pairs returned by friend suggestions
    pub friend_suggestions: usize,
    /// User for the age query; skipped when unset
    pub age_info_user: Option<i64>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            top_photos: 5,
            match_pairs: 5,
            match_year_diff: 2,
            friend_suggestions: 5,
            age_info_user: None,
        }
    }
}

/// Top-level configuration of the `fakebook` binary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Snapshot to load when none is given on the command line
    pub snapshot_path: Option<PathBuf>,
    pub params: QueryParams,
}

impl AnalyticsConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}
