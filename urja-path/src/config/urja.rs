//! Main UrjaConfig and conversion methods.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UrjaError};
use crate::pathfinding::SearchConfig;

use super::sections::{OutputSection, SearchSection};

/// Full UrjaPath configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UrjaConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Output settings
    #[serde(default)]
    pub output: OutputSection,
}

impl UrjaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            UrjaError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&contents)
    }

    /// Load from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("Config not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Convert to SearchConfig
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig::with_max_iterations(self.search.max_iterations)
    }
}
