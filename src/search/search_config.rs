//! Search settings read from a TOML file. Every key is optional, command line
//! flags take precedence over values found here.
//!
//! ```toml
//! engine = "astar"
//! time-limit = "30s"
//! expansion-limit = 100000
//! memory-limit-mb = 2048
//! ```

use crate::search::search_engines::{SearchEngineName, TerminationCondition};
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid time limit: {0}")]
    Duration(#[from] humantime::DurationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    pub engine: Option<SearchEngineName>,
    /// A human readable duration such as `"1m 30s"`
    pub time_limit: Option<String>,
    pub expansion_limit: Option<usize>,
    pub memory_limit_mb: Option<usize>,
}

impl FromStr for SearchConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl SearchConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        std::fs::read_to_string(path)?.parse()
    }

    /// Fill the settings that are unset here with the ones from `other`.
    pub fn or(self, other: SearchConfig) -> SearchConfig {
        SearchConfig {
            engine: self.engine.or(other.engine),
            time_limit: self.time_limit.or(other.time_limit),
            expansion_limit: self.expansion_limit.or(other.expansion_limit),
            memory_limit_mb: self.memory_limit_mb.or(other.memory_limit_mb),
        }
    }

    pub fn termination_condition(&self) -> Result<TerminationCondition, ConfigError> {
        let time_limit = self
            .time_limit
            .as_deref()
            .map(humantime::parse_duration)
            .transpose()?;
        Ok(TerminationCondition::new(
            time_limit,
            self.expansion_limit,
            self.memory_limit_mb,
        ))
    }
}
