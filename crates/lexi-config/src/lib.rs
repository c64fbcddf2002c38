use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::menu::MenuConfig;
use self::navigation::NavigationConfig;
use self::provider::ProviderConfig;

pub mod dictionary;
pub mod menu;
pub mod navigation;
pub mod provider;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub navigation: NavigationConfig,
    pub provider: ProviderConfig,
    pub menu: MenuConfig,
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Overlay environment variables on top of the loaded values
    pub fn apply_env(&mut self) {
        self.provider.apply_env();
        self.menu.apply_env();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation.definitions_per_category == 0 {
            return Err(ConfigError::Invalid(
                "navigation.definitions_per_category must be at least 1".to_string(),
            ));
        }
        if self.navigation.wrap_width == 0 {
            return Err(ConfigError::Invalid(
                "navigation.wrap_width must be at least 1".to_string(),
            ));
        }
        if self.provider.language.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "provider.language must not be empty".to_string(),
            ));
        }
        if self.menu.command.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "menu.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
