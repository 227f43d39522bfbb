//! Tag list parsing
//!
//! A serialized tag list is a `|`-joined sequence of `type:value` segments.
//! Empty segments (from leading, trailing or doubled delimiters) are dropped.

use crate::domain::tags::Tag;
use crate::error::Result;

/// Separates tags inside a serialized tag list
pub const DELIMITER: char = '|';

pub struct TagParser;

impl TagParser {
    /// Parse a serialized tag list into tags, in segment order
    ///
    /// Duplicates are kept here; collapsing them is the job of the collection
    /// the tags are assigned into. Any malformed segment fails the whole parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use crowdring::domain::tags::TagParser;
    ///
    /// let tags = TagParser::parse_list("region:east||size:large|").unwrap();
    /// assert_eq!(tags.len(), 2);
    /// assert!(TagParser::parse_list("region:east|###bad###").is_err());
    /// ```
    pub fn parse_list(input: &str) -> Result<Vec<Tag>> {
        input
            .split(DELIMITER)
            .filter(|segment| !segment.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Serialize tags back into the `|`-joined form
    pub fn join(tags: &[Tag]) -> String {
        tags.iter()
            .map(Tag::to_string)
            .collect::<Vec<_>>()
            .join(&DELIMITER.to_string())
    }
}
