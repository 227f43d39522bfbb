//! Error types for crowdring

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for crowdring
#[derive(Debug, Error)]
pub enum CrowdringError {
    #[error("Not a crowdring directory: {0}")]
    NotCrowdringDirectory(PathBuf),

    /// A serialized tag segment could not be decoded into a Tag
    #[error("Invalid tag '{segment}': {reason}")]
    InvalidTag { segment: String, reason: String },

    #[error("Filter not found: {0}")]
    FilterNotFound(String),

    #[error("Roster error in {path}: {message}")]
    Roster { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CrowdringError {
    pub(crate) fn invalid_tag(segment: &str, reason: impl Into<String>) -> Self {
        CrowdringError::InvalidTag {
            segment: segment.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CrowdringError::NotCrowdringDirectory(_) => 2,
            CrowdringError::InvalidTag { .. } => 3,
            CrowdringError::FilterNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CrowdringError::NotCrowdringDirectory(path) => {
                format!(
                    "Not a crowdring directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'crowdring init' in this directory\n\
                    • Navigate to an existing crowdring directory\n\
                    • Set CROWDRING_ROOT environment variable to your campaign path",
                    path.display()
                )
            }
            CrowdringError::InvalidTag { segment, reason } => {
                format!(
                    "Invalid tag '{}': {}\n\n\
                    Tags are written as type:value and separated by '|'.\n\
                    Examples:\n\
                    crowdring match --tags 'region:east|region:west'\n\
                    crowdring inspect 'region:east|size:large'",
                    segment, reason
                )
            }
            CrowdringError::FilterNotFound(name) => {
                format!(
                    "No saved filter named '{}'\n\n\
                    Suggestions:\n\
                    • Use 'crowdring filters' to see saved filters\n\
                    • Save one with: crowdring filters save {} 'type:value'",
                    name, name
                )
            }
            CrowdringError::Config(msg) if msg.contains("date format") => {
                format!(
                    "{}\n\n\
                    Expected format: DD-MM-YYYY\n\
                    Example: crowdring match --from 17-01-2025 --to 31-01-2025",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CrowdringError
pub type Result<T> = std::result::Result<T, CrowdringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_crowdring_directory_suggestion() {
        let err = CrowdringError::NotCrowdringDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("crowdring init"));
        assert!(msg.contains("CROWDRING_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_tag_message_names_segment() {
        let err = CrowdringError::invalid_tag("###bad###", "missing ':' separator");
        assert_eq!(
            err.to_string(),
            "Invalid tag '###bad###': missing ':' separator"
        );
        let msg = err.display_with_suggestions();
        assert!(msg.contains("type:value"));
        assert!(msg.contains("crowdring inspect"));
    }

    #[test]
    fn test_filter_not_found_suggestions() {
        let err = CrowdringError::FilterNotFound("east".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("crowdring filters"));
        assert!(msg.contains("filters save east"));
    }

    #[test]
    fn test_date_format_suggestions() {
        let err = CrowdringError::Config("Invalid date format: 2025/01/17".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("DD-MM-YYYY"));
        assert!(msg.contains("17-01-2025"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CrowdringError::NotCrowdringDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(CrowdringError::invalid_tag("x", "bad").exit_code(), 3);
        assert_eq!(CrowdringError::FilterNotFound("x".into()).exit_code(), 4);
        assert_eq!(CrowdringError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = CrowdringError::Config("broken".to_string());
        assert_eq!(err.display_with_suggestions(), "Configuration error: broken");
    }
}
