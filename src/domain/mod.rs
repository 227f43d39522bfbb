//! Domain layer - Tags, filters and the items they select

pub mod ringer;
pub mod tags;

pub use ringer::Ringer;
pub use tags::{SharedTagFilter, Tag, TagFilter, Taggable};
