//! Ambient settings shared by the demo binaries.
//!
//! ```toml
//! logger_prefix = "FANCY"
//! max_calories = 2000
//! api_base_url = "https://jsonplaceholder.typicode.com"
//! access_list = ["Bob"]
//! ```

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional TOML settings file.
pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub logger_prefix: String,
    pub max_calories: u32,
    pub api_base_url: String,
    pub access_list: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            logger_prefix: "FANCY".to_string(),
            max_calories: 2000,
            api_base_url: "https://jsonplaceholder.typicode.com".to_string(),
            access_list: vec!["Bob".to_string()],
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            PatternError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads the file named by `PATTERNS_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::info!(path = ?path, "loading catalog config");
                Self::from_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.logger_prefix.trim().is_empty() {
            return Err(PatternError::Config("logger_prefix must not be empty".into()));
        }
        if self.max_calories == 0 {
            return Err(PatternError::Config("max_calories must be positive".into()));
        }
        Ok(())
    }
}
