//! # Configuration
//!
//! Settings live in `config.json` inside the data directory. A missing file
//! means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `collection` | `posts` | Collection new posts are written to |
//!
//! The data directory itself is resolved by the CLI (`--data-dir`, then
//! `POSTDESK_HOME`, then the OS data directory).

use crate::error::{PostdeskError, Result};
use crate::store::{StoreConfig, DEFAULT_COLLECTION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostdeskConfig {
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl Default for PostdeskConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
        }
    }
}

impl PostdeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PostdeskConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "collection" => Some(self.collection.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "collection" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) || value.starts_with('.') {
                    return Err(PostdeskError::Config(format!(
                        "Invalid collection name: '{}'",
                        value
                    )));
                }
                self.collection = value.to_string();
                Ok(())
            }
            other => Err(PostdeskError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// The immutable store settings for a data directory.
    pub fn store_config<P: AsRef<Path>>(&self, data_dir: P) -> StoreConfig {
        StoreConfig::new(data_dir.as_ref(), self.collection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PostdeskConfig::default();
        assert_eq!(config.collection, "posts");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = PostdeskConfig::load(dir.path()).unwrap();
        assert_eq!(config, PostdeskConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PostdeskConfig::default();
        config.set("collection", "drafts").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = PostdeskConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.collection, "drafts");
    }

    #[test]
    fn test_empty_file_object_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();
        assert_eq!(
            PostdeskConfig::load(dir.path()).unwrap(),
            PostdeskConfig::default()
        );
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PostdeskConfig::default();
        assert!(config.set("collection", "../etc").is_err());
        assert!(config.set("collection", "  ").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config.collection, "posts");
    }

    #[test]
    fn test_store_config() {
        let config = PostdeskConfig::default();
        let store = config.store_config("/data");
        assert_eq!(store.collection_dir(), Path::new("/data/posts"));
    }
}
