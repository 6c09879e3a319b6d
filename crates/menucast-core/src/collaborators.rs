//! Collaborator traits the core consumes.
//!
//! Menu loading, URL resolution, and content resolution are owned by the
//! host. The core only defines the seams: a provider that returns an
//! already access-filtered, ordered tree; a URL resolver that decides
//! internal vs. external and yields the target string; a content resolver
//! that maps an internal path to backend metadata. All three are
//! synchronous; batching or caching around a remote resolver is the
//! host's concern.

use crate::cache::CacheMetadata;
use crate::model::{MenuLinkRecord, ResolveInfo};

/// Selection parameters for loading a menu tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeParams {
    /// Prune disabled links and their subtrees.
    pub only_enabled: bool,
    /// Promote subtrees at this depth to roots (1 = top level).
    pub min_depth: Option<u32>,
    /// Truncate children below this depth.
    pub max_depth: Option<u32>,
    /// Root the tree at this link's children, excluding the link itself.
    pub root_id: Option<String>,
}

/// Supplies access-filtered, pre-sorted menu trees.
pub trait MenuProvider {
    /// Load a menu tree. `None` means the menu does not exist; an empty
    /// vector is a known menu with no links. Neither is an error.
    fn load_tree(&self, menu_id: &str, params: &TreeParams) -> Option<Vec<MenuLinkRecord>>;
}

/// A link target resolved to a concrete URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    /// Whether the target lives outside the site.
    pub external: bool,
    /// The target URL string; for internal links a canonical path+query.
    pub url: String,
}

/// Resolves a link record's target into a URL string, deciding whether it
/// is external along the way.
pub trait UrlResolver {
    /// Resolve one record's target.
    fn resolve_url(&self, record: &MenuLinkRecord) -> ResolvedUrl;
}

/// Outcome of a content resolution attempt. "Not resolved" is a normal
/// outcome, not an error; the builder substitutes a route fallback.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    /// The resolver mapped the path to backend metadata.
    Resolved(ResolveInfo),
    /// The resolver does not know the path.
    NotResolved,
}

/// Maps an internal path to resolution metadata.
pub trait ContentResolver {
    /// Resolve one internal path. Cacheability of the lookup (tags from
    /// generated URLs, bounded lifetimes) is contributed to `cache`.
    fn resolve(
        &self,
        path: &str,
        langcode: Option<&str>,
        cache: &mut CacheMetadata,
    ) -> ResolveOutcome;
}
