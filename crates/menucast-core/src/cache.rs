//! Cacheability metadata collection.
//!
//! Every visited link and every resolver outcome can contribute cache
//! tags, contexts, and a max-age to the response. The collector is an
//! explicit value passed by mutable reference through the build, never
//! ambient state; the boundary layer reads it afterwards to compute cache
//! headers. Sets are ordered so serialized output is deterministic.

use std::collections::BTreeSet;

/// Accumulated cacheability dependencies for one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetadata {
    /// Cache tags, e.g. `menu:main` or `menu_link:front.home`.
    pub tags: BTreeSet<String>,
    /// Cache contexts, e.g. `user.permissions`.
    pub contexts: BTreeSet<String>,
    /// Smallest max-age any contributor demanded; `None` means no
    /// contributor constrained it.
    pub max_age: Option<u32>,
}

impl CacheMetadata {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one cache tag.
    pub fn add_tag<T: Into<String>>(&mut self, tag: T) {
        self.tags.insert(tag.into());
    }

    /// Add one cache context.
    pub fn add_context<C: Into<String>>(&mut self, context: C) {
        self.contexts.insert(context.into());
    }

    /// Constrain the max-age; the minimum across contributors wins.
    pub fn merge_max_age(&mut self, age: u32) {
        self.max_age = Some(self.max_age.map_or(age, |current| current.min(age)));
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &CacheMetadata) {
        self.tags.extend(other.tags.iter().cloned());
        self.contexts.extend(other.contexts.iter().cloned());
        if let Some(age) = other.max_age {
            self.merge_max_age(age);
        }
    }

    /// Resolve the max-age against a configured default: the default
    /// applies when nothing constrained it, otherwise the minimum wins.
    pub fn effective_max_age(&self, default_age: u32) -> u32 {
        self.max_age.map_or(default_age, |age| age.min(default_age))
    }
}
