//! Content resolvers.
//!
//! `StaticContentResolver` answers from a fixture of path-keyed entries,
//! contributing each matched entry's cache tags and max-age to the
//! collector. `NullContentResolver` never resolves, which drives the
//! core's route-fallback synthesis. Lookup keys are compared in path-only
//! normalized form so fixture authors need not care about slashes or
//! queries.

use serde::{Deserialize, Serialize};

use menucast_core::{
    normalize_match_path, CacheMetadata, ContentResolver, ResolveInfo, ResolveOutcome,
};

/// One fixture entry: a path (optionally language-scoped) and its
/// resolution metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverEntry {
    /// Path the entry answers for; normalized before comparison.
    pub path: String,
    /// When set, the entry only answers for this language.
    #[serde(default)]
    pub langcode: Option<String>,
    /// The resolution metadata to return.
    pub info: ResolveInfo,
    /// Cache tags contributed on a hit.
    #[serde(default)]
    pub cache_tags: Vec<String>,
    /// Max-age contributed on a hit.
    #[serde(default)]
    pub max_age: Option<u32>,
}

/// Fixture shape for the static resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverFixture {
    /// All entries, first match wins.
    #[serde(default)]
    pub entries: Vec<ResolverEntry>,
}

/// Content resolver over an in-memory fixture.
#[derive(Debug, Clone, Default)]
pub struct StaticContentResolver {
    fixture: ResolverFixture,
}

impl StaticContentResolver {
    /// Wrap a fixture.
    pub fn new(fixture: ResolverFixture) -> Self {
        Self { fixture }
    }

    /// Parse a fixture from raw JSON.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

impl ContentResolver for StaticContentResolver {
    fn resolve(
        &self,
        path: &str,
        langcode: Option<&str>,
        cache: &mut CacheMetadata,
    ) -> ResolveOutcome {
        let wanted = normalize_match_path(path);
        for entry in &self.fixture.entries {
            if normalize_match_path(&entry.path) != wanted {
                continue;
            }
            if let Some(lc) = entry.langcode.as_deref() {
                if langcode != Some(lc) {
                    continue;
                }
            }
            for tag in &entry.cache_tags {
                cache.add_tag(tag.clone());
            }
            if let Some(age) = entry.max_age {
                cache.merge_max_age(age);
            }
            return ResolveOutcome::Resolved(entry.info.clone());
        }
        ResolveOutcome::NotResolved
    }
}

/// Resolver that knows nothing; every internal link falls back to a route.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContentResolver;

impl ContentResolver for NullContentResolver {
    fn resolve(
        &self,
        _path: &str,
        _langcode: Option<&str>,
        _cache: &mut CacheMetadata,
    ) -> ResolveOutcome {
        ResolveOutcome::NotResolved
    }
}
