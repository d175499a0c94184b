// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host-supplied configuration
//!
//! An optional TOML document with three tables: `[registry]`, `[parameters]`
//! (base parameters for the root scope) and `[log]`.

mod log;

pub use self::log::{LogConfig, LogFormat, LogLevel};

use crate::params::{ParameterStore, ParameterValue};
use crate::registry::{ObserverRegistry, RegistryConfig};
use crate::scope::Scope;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub registry: RegistryConfig,
    /// Parameters attached to every event logged from the root scope
    pub parameters: BTreeMap<String, ParameterValue>,
    pub log: LogConfig,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            parameters = config.parameters.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn base_parameters(&self) -> ParameterStore {
        ParameterStore::from_values(self.parameters.clone())
    }

    pub fn build_registry(&self) -> ObserverRegistry {
        ObserverRegistry::with_config(self.registry)
    }

    /// Root scope carrying the configured base parameters
    pub fn root_scope(&self, registry: ObserverRegistry) -> Scope {
        Scope::with_parameters(registry, self.base_parameters())
    }
}
