//! Output formatting utilities

use crate::domain::{Ringer, TagFilter};
use crate::error::{CrowdringError, Result};
use chrono::NaiveDate;

/// Parse a DD-MM-YYYY command-line date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%d-%m-%Y").map_err(|_| {
        CrowdringError::Config(format!(
            "Invalid date format: '{}'. Expected DD-MM-YYYY",
            input
        ))
    })
}

/// Format matching ringers, one per line: phone number then tags
pub fn format_ringer_list(ringers: &[Ringer]) -> String {
    if ringers.is_empty() {
        return "No matching ringers".to_string();
    }

    let mut output = String::new();
    for ringer in ringers {
        let tags: Vec<String> = ringer.tags.iter().map(|t| t.to_string()).collect();
        output.push_str(&format!("{}  {}\n", ringer.phone_number, tags.join("|")));
    }
    output
}

/// Format a filter's groups: one line per type, values OR-ed
pub fn format_filter_groups(filter: &TagFilter) -> String {
    if filter.is_empty() {
        return "(empty filter: accepts everything)".to_string();
    }

    let mut output = String::new();
    for (tag_type, tags) in filter.groups() {
        let values: Vec<&str> = tags.iter().map(|t| t.value()).collect();
        output.push_str(&format!("{}: {}\n", tag_type, values.join(" OR ")));
    }
    output
}

/// Format saved filters, one `name = tags` line each
pub fn format_filter_list(filters: &[(String, TagFilter)]) -> String {
    if filters.is_empty() {
        return "No saved filters".to_string();
    }

    let mut output = String::new();
    for (name, filter) in filters {
        output.push_str(&format!("{} = {}\n", name, filter));
    }
    output
}
