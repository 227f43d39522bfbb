//! Ringer filtering use case
//!
//! Loads the roster, narrows it by join date, then applies a tag filter.

use crate::domain::{Ringer, TagFilter};
use crate::error::{CrowdringError, Result};
use crate::infrastructure::{CampaignRepository, FileSystemRepository};
use chrono::NaiveDate;

/// Options for filtering the roster
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Inline serialized tag list
    pub tags: Option<String>,

    /// Name of a saved filter
    pub filter: Option<String>,

    /// Earliest join date (inclusive)
    pub from: Option<NaiveDate>,

    /// Latest join date (inclusive)
    pub to: Option<NaiveDate>,
}

/// Service for selecting ringers with a tag filter
pub struct FilterRingersService {
    repository: FileSystemRepository,
}

impl FilterRingersService {
    pub fn new(repository: FileSystemRepository) -> Self {
        FilterRingersService { repository }
    }

    /// Execute the filter
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Both an inline tag list and a saved filter name are given
    /// - The tag list is malformed or the saved filter does not exist
    /// - The roster cannot be read
    pub fn execute(&self, options: &FilterOptions) -> Result<Vec<Ringer>> {
        if let (Some(from), Some(to)) = (options.from, options.to) {
            if from > to {
                return Err(CrowdringError::Config(format!(
                    "--from ({}) is after --to ({})",
                    from.format("%d-%m-%Y"),
                    to.format("%d-%m-%Y")
                )));
            }
        }

        let config = self.repository.load_config()?;

        let filter = match (&options.tags, &options.filter) {
            (Some(_), Some(_)) => {
                return Err(CrowdringError::Config(
                    "Use either --tags or --filter, not both".to_string(),
                ))
            }
            (Some(tags), None) => tags.parse::<TagFilter>()?,
            (None, Some(name)) => config.named_filter(name)?,
            (None, None) => TagFilter::new(),
        };

        let ringers: Vec<Ringer> = self
            .repository
            .load_ringers(&config)?
            .into_iter()
            .filter(|ringer| ringer.joined_within(options.from, options.to))
            .collect();

        Ok(filter.filter(ringers))
    }
}
