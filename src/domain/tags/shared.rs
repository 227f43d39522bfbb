//! Copy-on-write filter handle for concurrent use
//!
//! Readers evaluate against an `Arc` snapshot without holding the lock, and
//! writers install a whole new snapshot, so an evaluation never sees a
//! half-replaced tag set.

use crate::domain::tags::{TagFilter, TagSource, Taggable};
use crate::error::Result;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct SharedTagFilter {
    current: RwLock<Arc<TagFilter>>,
}

impl SharedTagFilter {
    pub fn new(filter: TagFilter) -> Self {
        SharedTagFilter {
            current: RwLock::new(Arc::new(filter)),
        }
    }

    /// The filter as of now; later replacements do not affect it
    pub fn snapshot(&self) -> Arc<TagFilter> {
        let guard = self.current.read().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering poisoned tag filter lock");
            PoisonError::into_inner(poisoned)
        });
        Arc::clone(&guard)
    }

    /// Atomically install a new filter
    pub fn replace(&self, filter: TagFilter) {
        let mut guard = self.current.write().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering poisoned tag filter lock");
            PoisonError::into_inner(poisoned)
        });
        *guard = Arc::new(filter);
    }

    /// Build the new tag set outside the lock, then swap it in
    ///
    /// On a parse failure the live filter is left as it was.
    pub fn set_tags<'a>(&self, source: impl Into<TagSource<'a>>) -> Result<()> {
        let mut next = TagFilter::new();
        next.set_tags(source)?;
        self.replace(next);
        Ok(())
    }

    pub fn accept<T: Taggable + ?Sized>(&self, item: &T) -> bool {
        self.snapshot().accept(item)
    }

    pub fn filter<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Taggable,
    {
        self.snapshot().filter(items)
    }
}

impl From<TagFilter> for SharedTagFilter {
    fn from(filter: TagFilter) -> Self {
        SharedTagFilter::new(filter)
    }
}
