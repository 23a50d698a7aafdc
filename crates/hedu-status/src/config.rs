//! # Engine Configuration
//!
//! Deployments that inherited extra historical values can extend the alias
//! table from a YAML file read once at startup:
//!
//! ```yaml
//! legacy_aliases:
//!   published: verified
//!   declined: rejected
//! matching:
//!   trim_whitespace: true
//!   case_insensitive: false
//! ```
//!
//! Alias targets must be canonical names; anything else fails to parse.
//! The file only ever adds to the built-in table.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use hedu_core::HeduError;

use crate::alias::{AliasTable, MatchPolicy};
use crate::error::StatusError;
use crate::taxonomy::CanonicalStatus;

/// Startup configuration for the status engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusConfig {
    /// Extra raw value → canonical status mappings.
    pub legacy_aliases: BTreeMap<String, CanonicalStatus>,
    /// Input normalisation before lookup.
    pub matching: MatchPolicy,
}

impl StatusConfig {
    /// Environment variable naming the config file.
    pub const ENV_VAR: &'static str = "HEDU_STATUS_CONFIG";

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, StatusError> {
        Self::parse(yaml).map_err(|e| StatusError::Config(e.to_string()))
    }

    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self, StatusError> {
        let text = std::fs::read_to_string(path).map_err(HeduError::from)?;
        let config = Self::parse(&text)
            .map_err(|e| StatusError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            aliases = config.legacy_aliases.len(),
            "loaded status config"
        );
        Ok(config)
    }

    fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Build the alias table this configuration describes.
    pub fn alias_table(&self) -> Result<AliasTable, StatusError> {
        self.legacy_aliases
            .iter()
            .try_fold(AliasTable::builder(self.matching), |builder, (raw, status)| {
                builder.alias(raw, *status)
            })
            .map(|builder| builder.build())
    }
}
