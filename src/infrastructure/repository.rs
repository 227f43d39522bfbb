//! File system repository

use crate::domain::Ringer;
use crate::error::{CrowdringError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable pointing at a crowdring root
pub const ROOT_ENV: &str = "CROWDRING_ROOT";

/// Shape of one roster file
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default, rename = "ringer")]
    ringers: Vec<Ringer>,
}

/// Abstract repository for campaign data
pub trait CampaignRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .crowdring/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .crowdring/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .crowdring directory exists
    fn is_initialized(&self) -> bool;

    /// Create .crowdring directory structure
    fn initialize(&self) -> Result<()>;

    /// Load every ringer in the roster, in roster order
    fn load_ringers(&self, config: &Config) -> Result<Vec<Ringer>>;
}

/// File system implementation of CampaignRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the crowdring root
    /// First checks CROWDRING_ROOT environment variable, then walks up from
    /// the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(CrowdringError::Config(format!(
                    "{} is set to '{}' but no .crowdring directory found. \
                    Run 'crowdring init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the crowdring root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(CrowdringError::NotCrowdringDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    /// All roster files, sorted by path, skipping hidden entries
    fn roster_files(roster_dir: &Path) -> Vec<PathBuf> {
        let walker = WalkDir::new(roster_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !name.starts_with('.'))
            });

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect()
    }

    fn read_roster_file(path: &Path) -> Result<Vec<Ringer>> {
        let contents = fs::read_to_string(path)?;
        let file: RosterFile = toml::from_str(&contents).map_err(|e| CrowdringError::Roster {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        Ok(file.ringers)
    }
}

impl CampaignRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(CrowdringError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&config_dir)?;
        Ok(())
    }

    fn load_ringers(&self, config: &Config) -> Result<Vec<Ringer>> {
        let roster_dir = self.root.join(&config.roster);
        if !roster_dir.is_dir() {
            tracing::debug!(path = %roster_dir.display(), "roster directory missing");
            return Ok(Vec::new());
        }

        let files = Self::roster_files(&roster_dir);
        let mut ringers = Vec::new();
        for file in &files {
            ringers.extend(Self::read_roster_file(file)?);
        }

        tracing::debug!(
            files = files.len(),
            ringers = ringers.len(),
            "roster loaded"
        );
        Ok(ringers)
    }
}
