//! Configuration management

use crate::domain::TagFilter;
use crate::error::{CrowdringError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Marker directory holding config.toml
pub const CONFIG_DIR: &str = ".crowdring";

const DEFAULT_ROSTER: &str = "ringers";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Roster directory, relative to the crowdring root
    #[serde(default = "default_roster")]
    pub roster: String,

    pub created: DateTime<Utc>,

    /// Saved filters: name -> serialized tag list
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
}

fn default_roster() -> String {
    DEFAULT_ROSTER.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            roster: default_roster(),
            created: Utc::now(),
            filters: BTreeMap::new(),
        }
    }

    /// Load config from .crowdring/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CrowdringError::NotCrowdringDirectory(path.to_path_buf())
            } else {
                CrowdringError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| CrowdringError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .crowdring/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join("config.toml");

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve a saved filter by name and parse it
    pub fn named_filter(&self, name: &str) -> Result<TagFilter> {
        self.filters
            .get(name)
            .ok_or_else(|| CrowdringError::FilterNotFound(name.to_string()))?
            .parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.roster, "ringers");
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config
            .filters
            .insert("east".to_string(), "region:east".to_string());

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".crowdring").exists());
        assert!(temp.path().join(".crowdring/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            CrowdringError::NotCrowdringDirectory(_) => {}
            other => panic!("Expected NotCrowdringDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_roster_defaults_when_absent() {
        let config: Config = toml::from_str("created = \"2025-01-17T10:00:00Z\"").unwrap();
        assert_eq!(config.roster, "ringers");
    }

    #[test]
    fn test_named_filter() {
        let mut config = Config::new();
        config.filters.insert(
            "big-east".to_string(),
            "region:east|size:large".to_string(),
        );

        let filter = config.named_filter("big-east").unwrap();
        assert_eq!(filter.len(), 2);

        match config.named_filter("missing").unwrap_err() {
            CrowdringError::FilterNotFound(name) => assert_eq!(name, "missing"),
            other => panic!("Expected FilterNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_named_filter_with_bad_tags() {
        let mut config = Config::new();
        config
            .filters
            .insert("broken".to_string(), "###bad###".to_string());
        assert!(matches!(
            config.named_filter("broken"),
            Err(CrowdringError::InvalidTag { .. })
        ));
    }
}
