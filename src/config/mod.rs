//! Application configuration for kubetypes

use crate::error::{RegistryError, Result};
use crate::resources::{builtin_definitions, DefinitionSet, InstalledFeatures};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration stored in ~/.kt/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Custom definition set to use instead of the built-in one
    #[serde(default)]
    pub definitions: Option<PathBuf>,

    /// Whether to use colors
    #[serde(default = "default_true")]
    pub colors: bool,

    /// Cluster used when none is given on the command line
    #[serde(default)]
    pub default_cluster: Option<String>,

    /// Installed features of the target environment
    #[serde(default)]
    pub features: InstalledFeatures,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            definitions: None,
            colors: true,
            default_cluster: None,
            features: InstalledFeatures::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// The definition set this configuration selects
    pub fn definition_set(&self) -> Result<DefinitionSet> {
        match &self.definitions {
            Some(path) => DefinitionSet::from_path(path),
            None => Ok(builtin_definitions()),
        }
    }
}

/// Get the kt config directory (~/.kt)
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".kt"))
        .ok_or_else(|| RegistryError::Config("Could not determine home directory".to_string()))
}

/// Load application config from ~/.kt/config.toml
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_dir()?.join("config.toml"))
}

/// Load application config from `path`, defaulting when it does not exist
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| RegistryError::Config(e.to_string()))
    } else {
        Ok(AppConfig::default())
    }
}
