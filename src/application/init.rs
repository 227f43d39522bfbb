//! Initialize campaign directory use case

use crate::error::Result;
use crate::infrastructure::{CampaignRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

pub struct InitService;

impl InitService {
    /// Create `.crowdring/config.toml` and an empty roster directory at `path`
    pub fn execute(path: &Path) -> Result<Config> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new();
        repo.save_config(&config)?;
        fs::create_dir_all(path.join(&config.roster))?;

        tracing::debug!(path = %path.display(), "initialized crowdring directory");
        Ok(config)
    }
}
