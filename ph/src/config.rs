//! Configuration types and loading

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the prompt store lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
}

fn default_store_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prompthelper")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
        }
    }
}

/// Which share backend to use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Backend name; only "mock" ships
    #[serde(default = "default_share_provider")]
    pub provider: String,
}

fn default_share_provider() -> String {
    "mock".to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            provider: default_share_provider(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub share: ShareConfig,

    /// Log level override (trace, debug, info, warn, error)
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("prompthelper").join("config.yml")),
            Some(PathBuf::from("prompthelper.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Read just the log level from the config file, before logging is up
    ///
    /// Errors are swallowed: a broken config file should not prevent the
    /// real load from reporting it later.
    pub fn load_log_level(path: Option<&PathBuf>) -> Option<String> {
        Self::load(path).ok().and_then(|c| c.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.share.provider, "mock");
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_load_partial_yaml_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "storage:\n  store_dir: /tmp/ph-store\nlog_level: debug\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.storage.store_dir, PathBuf::from("/tmp/ph-store"));
        assert_eq!(config.share.provider, "mock");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_log_level_swallows_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, ": not yaml :").unwrap();

        assert!(Config::load_log_level(Some(&path)).is_none());
    }
}
