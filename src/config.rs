use crate::filter::{FilterError, NameFilter, new_component_filter, new_kind_filter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Include/exclude rules for every filtered entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub components: FilterRules,
    pub kinds: FilterRules,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterRules {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl FilterRules {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Replace these rules with the given ones unless both are empty.
    ///
    /// Overrides are all-or-nothing so that a configured exclude list and an
    /// include given on the command line do not end up in the same filter.
    pub fn overridden_by(self, include: &[String], exclude: &[String]) -> Self {
        let overrides = Self {
            include: include.to_vec(),
            exclude: exclude.to_vec(),
        };
        if overrides.is_empty() { self } else { overrides }
    }
}

impl FilterConfig {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn component_filter(&self) -> Result<NameFilter, FilterError> {
        new_component_filter(&self.components.include, &self.components.exclude)
    }

    pub fn kind_filter(&self) -> Result<NameFilter, FilterError> {
        new_kind_filter(&self.kinds.include, &self.kinds.exclude)
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FilterConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(FilterConfig::default())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FilterConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    tracing::debug!(path = %path_display, "loaded filter config");

    FilterConfig::from_toml(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}
