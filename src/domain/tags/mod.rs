//! Tag system

pub mod filter;
pub mod parser;
pub mod shared;
pub mod tag;

// Re-export main types
pub use filter::{TagFilter, TagSource, Taggable};
pub use parser::TagParser;
pub use shared::SharedTagFilter;
pub use tag::Tag;
