//! Inspect filter use case

use crate::domain::TagFilter;
use crate::error::Result;

/// Parses a tag list without touching any campaign data
pub struct InspectFilterService;

impl InspectFilterService {
    pub fn execute(tags: &str) -> Result<TagFilter> {
        tags.parse()
    }
}
