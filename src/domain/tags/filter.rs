//! Tag-based filtering
//!
//! A filter's tags are grouped by type. An item passes when, for every group,
//! it carries at least one of that group's tags: AND across types, OR within
//! a type. A filter with no tags accepts everything.
//!
//! # Examples
//!
//! ```
//! use crowdring::domain::tags::{Tag, TagFilter};
//!
//! let filter: TagFilter = "region:east|region:west|size:large".parse().unwrap();
//!
//! let item: Vec<Tag> = vec!["region:west".parse().unwrap(), "size:large".parse().unwrap()];
//! assert!(filter.accept(&item));
//!
//! let item: Vec<Tag> = vec!["region:west".parse().unwrap()];
//! assert!(!filter.accept(&item));
//! ```

use crate::domain::tags::{Tag, TagParser};
use crate::error::{CrowdringError, Result};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Anything a filter can evaluate: it only has to expose its tags
pub trait Taggable {
    fn tags(&self) -> &[Tag];
}

impl Taggable for [Tag] {
    fn tags(&self) -> &[Tag] {
        self
    }
}

impl Taggable for Vec<Tag> {
    fn tags(&self) -> &[Tag] {
        self
    }
}

impl<T: Taggable + ?Sized> Taggable for &T {
    fn tags(&self) -> &[Tag] {
        (**self).tags()
    }
}

/// What a filter's tags can be assigned from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSource<'a> {
    /// A `|`-joined tag list, run through [`TagParser`]
    Serialized(&'a str),
    /// Already-built tags, stored as given
    Tags(Vec<Tag>),
}

impl<'a> From<&'a str> for TagSource<'a> {
    fn from(s: &'a str) -> Self {
        TagSource::Serialized(s)
    }
}

impl<'a> From<&'a String> for TagSource<'a> {
    fn from(s: &'a String) -> Self {
        TagSource::Serialized(s.as_str())
    }
}

impl From<Vec<Tag>> for TagSource<'_> {
    fn from(tags: Vec<Tag>) -> Self {
        TagSource::Tags(tags)
    }
}

impl From<&[Tag]> for TagSource<'_> {
    fn from(tags: &[Tag]) -> Self {
        TagSource::Tags(tags.to_vec())
    }
}

impl TagSource<'_> {
    fn into_tags(self) -> Result<Vec<Tag>> {
        match self {
            TagSource::Serialized(s) => TagParser::parse_list(s),
            TagSource::Tags(tags) => Ok(tags),
        }
    }
}

/// A set of tags plus the grouped matching rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    /// Unique tags, in order of first insertion
    tags: Vec<Tag>,
}

impl TagFilter {
    /// Create a filter with no tags (accepts everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filter's tags
    ///
    /// A serialized source is parsed first; if any segment is malformed the
    /// error is returned and the current tags are left untouched.
    pub fn set_tags<'a>(&mut self, source: impl Into<TagSource<'a>>) -> Result<()> {
        let tags = source.into().into_tags()?;
        self.tags = dedup(tags);
        tracing::debug!(tags = %self, count = self.tags.len(), "filter tags replaced");
        Ok(())
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The filter's tags grouped by type, in type order
    pub fn groups(&self) -> BTreeMap<&str, Vec<&Tag>> {
        let mut groups: BTreeMap<&str, Vec<&Tag>> = BTreeMap::new();
        for tag in &self.tags {
            groups.entry(tag.tag_type()).or_default().push(tag);
        }
        groups
    }

    /// Decide whether a single item passes the filter
    pub fn accept<T: Taggable + ?Sized>(&self, item: &T) -> bool {
        accepts(&self.match_groups(), item.tags())
    }

    /// Keep the items that pass, in their original order
    pub fn filter<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Taggable,
    {
        let groups = self.match_groups();
        let mut total = 0usize;
        let kept: Vec<I::Item> = items
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|item| accepts(&groups, item.tags()))
            .collect();
        tracing::debug!(kept = kept.len(), total, "filtered items");
        kept
    }

    fn match_groups(&self) -> Vec<HashSet<&Tag>> {
        self.groups()
            .into_values()
            .map(|group| group.into_iter().collect())
            .collect()
    }
}

/// Every group must share at least one tag with the item
fn accepts(groups: &[HashSet<&Tag>], item_tags: &[Tag]) -> bool {
    groups
        .iter()
        .all(|group| item_tags.iter().any(|tag| group.contains(tag)))
}

fn dedup(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

impl From<Vec<Tag>> for TagFilter {
    fn from(tags: Vec<Tag>) -> Self {
        TagFilter { tags: dedup(tags) }
    }
}

impl FromStr for TagFilter {
    type Err = CrowdringError;

    fn from_str(s: &str) -> Result<Self> {
        let mut filter = TagFilter::new();
        filter.set_tags(s)?;
        Ok(filter)
    }
}

/// Renders the serialized `|`-joined form
impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TagParser::join(&self.tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(s: &str) -> Vec<Tag> {
        TagParser::parse_list(s).unwrap()
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let filter = TagFilter::new();
        assert!(filter.accept(&tags("")));
        assert!(filter.accept(&tags("region:east|size:small")));
    }

    #[test]
    fn test_or_within_group() {
        let filter: TagFilter = "region:east|region:west".parse().unwrap();
        assert!(filter.accept(&tags("region:west")));
        assert!(filter.accept(&tags("region:east|region:west")));
        assert!(!filter.accept(&tags("region:north")));
    }

    #[test]
    fn test_and_across_groups() {
        let filter: TagFilter = "region:east|size:large".parse().unwrap();
        assert!(!filter.accept(&tags("region:east")));
        assert!(!filter.accept(&tags("size:large")));
        assert!(filter.accept(&tags("region:east|size:large")));
    }

    #[test]
    fn test_group_with_absent_type_rejects() {
        let filter: TagFilter = "region:east|campaign:spring".parse().unwrap();
        assert!(!filter.accept(&tags("region:east|size:large")));
    }

    #[test]
    fn test_item_types_outside_filter_are_ignored() {
        let filter: TagFilter = "region:east".parse().unwrap();
        assert!(filter.accept(&tags("region:east|size:small|language:fr")));
    }

    #[test]
    fn test_same_value_different_type_does_not_match() {
        let filter: TagFilter = "region:east".parse().unwrap();
        assert!(!filter.accept(&tags("direction:east")));
    }

    #[test]
    fn test_set_tags_collapses_duplicates_and_keeps_order() {
        let mut filter = TagFilter::new();
        filter
            .set_tags("size:large|region:east|size:large|region:east")
            .unwrap();
        assert_eq!(filter.tags(), tags("size:large|region:east").as_slice());
    }

    #[test]
    fn test_set_tags_from_collection() {
        let mut filter = TagFilter::new();
        filter.set_tags(tags("region:east|region:east")).unwrap();
        assert_eq!(filter.len(), 1);

        let more = tags("size:large");
        filter.set_tags(more.as_slice()).unwrap();
        assert_eq!(filter.tags(), more.as_slice());
    }

    #[test]
    fn test_set_tags_failure_leaves_tags_untouched() {
        let mut filter: TagFilter = "size:large".parse().unwrap();
        assert!(filter.set_tags("region:east|###bad###").is_err());
        assert_eq!(filter.tags(), tags("size:large").as_slice());
    }

    #[test]
    fn test_set_tags_to_empty_is_legal() {
        let mut filter: TagFilter = "size:large".parse().unwrap();
        filter.set_tags("||").unwrap();
        assert!(filter.is_empty());
        assert!(filter.accept(&tags("region:north")));
    }

    #[test]
    fn test_groups_by_type() {
        let filter: TagFilter = "size:large|region:east|region:west".parse().unwrap();
        let groups = filter.groups();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["region", "size"]);
        assert_eq!(groups["region"].len(), 2);
        assert_eq!(groups["size"].len(), 1);
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let filter: TagFilter = "region:east".parse().unwrap();
        let a = tags("region:east|size:large");
        let b = tags("region:west");
        let c = tags("region:east");
        let items = vec![a.clone(), b, c.clone(), a.clone()];

        let kept = filter.filter(&items);
        assert_eq!(kept, vec![&a, &c, &a]);
        assert_eq!(items.len(), 4);

        let owned = filter.filter(items);
        assert_eq!(owned, vec![a.clone(), c, a]);
    }

    #[test]
    fn test_display_round_trip() {
        let filter: TagFilter = "|region:east||size:large|region:east".parse().unwrap();
        assert_eq!(filter.to_string(), "region:east|size:large");
        let reparsed: TagFilter = filter.to_string().parse().unwrap();
        assert_eq!(reparsed, filter);
    }
}
