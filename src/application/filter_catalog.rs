//! Saved filter management use case

use crate::domain::TagFilter;
use crate::error::{CrowdringError, Result};
use crate::infrastructure::{CampaignRepository, FileSystemRepository};
use regex::Regex;
use std::sync::OnceLock;

fn name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap())
}

/// Service for listing, saving and removing named filters
pub struct FilterCatalogService {
    repository: FileSystemRepository,
}

impl FilterCatalogService {
    pub fn new(repository: FileSystemRepository) -> Self {
        FilterCatalogService { repository }
    }

    /// All saved filters, sorted by name
    pub fn list(&self) -> Result<Vec<(String, TagFilter)>> {
        let config = self.repository.load_config()?;
        config
            .filters
            .keys()
            .map(|name| Ok((name.clone(), config.named_filter(name)?)))
            .collect()
    }

    /// Parse and store a filter under `name`, replacing any previous one
    ///
    /// The stored form is the normalized serialization, so duplicates and
    /// empty segments do not survive. Nothing is written on a parse failure.
    pub fn save(&self, name: &str, tags: &str) -> Result<TagFilter> {
        if !name_regex().is_match(name) {
            return Err(CrowdringError::Config(format!(
                "Invalid filter name: '{}'. Use letters, digits, '-' or '_'",
                name
            )));
        }

        let filter: TagFilter = tags.parse()?;

        let mut config = self.repository.load_config()?;
        config.filters.insert(name.to_string(), filter.to_string());
        self.repository.save_config(&config)?;

        tracing::debug!(name, tags = %filter, "saved filter");
        Ok(filter)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        if config.filters.remove(name).is_none() {
            return Err(CrowdringError::FilterNotFound(name.to_string()));
        }
        self.repository.save_config(&config)
    }
}
