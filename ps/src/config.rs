//! Configuration for promptstore

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the prompt store document
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
}

fn default_store_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prompthelper")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
        }
    }
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

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "store_dir: /tmp/elsewhere\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.store_dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_save_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        let config = Config {
            store_dir: PathBuf::from("/var/prompts"),
        };
        config.save(&path).unwrap();
        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.store_dir, config.store_dir);
    }
}
