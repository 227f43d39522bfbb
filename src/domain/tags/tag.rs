//! Tag value type
//!
//! A tag is an opaque `(type, value)` classification label. Its serialized
//! form is `type:value`, split at the first `:`. Types are restricted to
//! `[A-Za-z0-9_-]+`, so a value may itself contain `:` and the encoding
//! stays reversible.

use crate::error::{CrowdringError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Separates the type from the value inside one serialized tag
pub const TYPE_SEPARATOR: char = ':';

fn type_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap())
}

/// An immutable `(type, value)` label attached to filters and taggable items
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    tag_type: String,
    value: String,
}

impl Tag {
    /// Build a tag, applying the same rules as parsing its `type:value` form
    ///
    /// # Examples
    ///
    /// ```
    /// use crowdring::domain::tags::Tag;
    ///
    /// let tag = Tag::new("region", "east").unwrap();
    /// assert_eq!(tag.to_string(), "region:east");
    /// assert!(Tag::new("", "east").is_err());
    /// ```
    pub fn new(tag_type: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let tag_type = tag_type.into();
        let value = value.into();
        let segment = format!("{}{}{}", tag_type, TYPE_SEPARATOR, value);

        if !type_regex().is_match(&tag_type) {
            return Err(CrowdringError::invalid_tag(
                &segment,
                "type must be letters, digits, '-' or '_'",
            ));
        }
        validate_value(&segment, &value)?;

        Ok(Tag { tag_type, value })
    }

    /// The category this tag belongs to
    pub fn tag_type(&self) -> &str {
        &self.tag_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

fn validate_value(segment: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CrowdringError::invalid_tag(segment, "value is empty"));
    }
    if value.contains(crate::domain::tags::parser::DELIMITER) {
        return Err(CrowdringError::invalid_tag(
            segment,
            "value must not contain '|'",
        ));
    }
    if value.trim() != value {
        return Err(CrowdringError::invalid_tag(
            segment,
            "value must not start or end with whitespace",
        ));
    }
    Ok(())
}

impl FromStr for Tag {
    type Err = CrowdringError;

    fn from_str(s: &str) -> Result<Self> {
        let (tag_type, value) = s
            .split_once(TYPE_SEPARATOR)
            .ok_or_else(|| CrowdringError::invalid_tag(s, "missing ':' separator"))?;
        Tag::new(tag_type, value)
    }
}

impl TryFrom<String> for Tag {
    type Error = CrowdringError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.tag_type, TYPE_SEPARATOR, self.value)
    }
}
