//! Tree building: raw link records to output items.
//!
//! One recursive pass over the provider's snapshot. Per record: honor the
//! upstream access decision, resolve the target URL, normalize it when
//! internal, optionally resolve content metadata (with a deterministic
//! route fallback), recurse into children. Flags are initialized false and
//! filled in by a later pass. The only cross-cutting effect is cache
//! metadata accumulation into the supplied collector.

use crate::cache::CacheMetadata;
use crate::collaborators::{ContentResolver, ResolveOutcome, UrlResolver};
use crate::errors::{MenuError, MenuResult};
use crate::model::{MenuItem, MenuLinkRecord, ResolveInfo};
use crate::path;

/// Everything the builder needs besides the records themselves. Config
/// values enter here explicitly; the builder reads no ambient state.
pub struct BuildContext<'a> {
    /// Resolves link targets to URL strings and external-ness.
    pub urls: &'a dyn UrlResolver,
    /// Resolves internal paths to backend metadata.
    pub resolver: &'a dyn ContentResolver,
    /// Base URL prepended to canonical paths in fallback synthesis.
    pub base_url: &'a str,
    /// Language code passed through to the resolver.
    pub langcode: Option<&'a str>,
    /// Whether to attach resolution metadata at all.
    pub include_resolve: bool,
}

/// Build the output item tree from an access-filtered record tree.
///
/// Records with a denied access decision are skipped together with their
/// subtrees. An unrecognized access decision aborts the whole build.
pub fn build_tree(
    records: &[MenuLinkRecord],
    ctx: &BuildContext<'_>,
    cache: &mut CacheMetadata,
) -> MenuResult<Vec<MenuItem>> {
    let mut items = Vec::with_capacity(records.len());
    for record in records {
        // Visited links contribute cacheability even when denied: the
        // decision itself can vary by cache context.
        cache.add_tag(format!("menu_link:{}", record.id));
        if !access_allows(record)? {
            continue;
        }

        let target = ctx.urls.resolve_url(record);
        let url = if target.external {
            target.url
        } else {
            path::normalize_link_url(&target.url)
        };

        let resolve = if ctx.include_resolve && !target.external {
            Some(resolve_with_fallback(&url, ctx, cache))
        } else {
            None
        };

        let children = build_tree(&record.children, ctx, cache)?;

        items.push(MenuItem {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            url,
            external: target.external,
            expanded: record.expanded,
            parent: record.parent.clone(),
            weight: record.weight,
            active: false,
            in_active_trail: false,
            resolve,
            children,
        });
    }
    Ok(items)
}

fn resolve_with_fallback(
    url: &str,
    ctx: &BuildContext<'_>,
    cache: &mut CacheMetadata,
) -> ResolveInfo {
    match ctx.resolver.resolve(url, ctx.langcode, cache) {
        ResolveOutcome::Resolved(info) => info,
        ResolveOutcome::NotResolved => ResolveInfo::route_fallback(url, ctx.base_url),
    }
}

fn access_allows(record: &MenuLinkRecord) -> MenuResult<bool> {
    match record.access.as_deref() {
        None | Some("allowed") => Ok(true),
        Some("denied") => Ok(false),
        Some(other) => Err(MenuError::access_contract(format!(
            "unrecognized access decision {other:?} on link {}",
            record.id
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::ResolvedUrl;
    use crate::model::ResolveKind;

    struct SchemeUrls;

    impl UrlResolver for SchemeUrls {
        fn resolve_url(&self, record: &MenuLinkRecord) -> ResolvedUrl {
            ResolvedUrl {
                external: record.target.contains("://"),
                url: record.target.clone(),
            }
        }
    }

    struct NoResolver;

    impl ContentResolver for NoResolver {
        fn resolve(
            &self,
            _path: &str,
            _langcode: Option<&str>,
            _cache: &mut CacheMetadata,
        ) -> ResolveOutcome {
            ResolveOutcome::NotResolved
        }
    }

    struct EntityResolver;

    impl ContentResolver for EntityResolver {
        fn resolve(
            &self,
            path: &str,
            _langcode: Option<&str>,
            cache: &mut CacheMetadata,
        ) -> ResolveOutcome {
            cache.add_tag("node:1");
            ResolveOutcome::Resolved(ResolveInfo {
                resolved: true,
                kind: ResolveKind::Entity,
                canonical: path.to_string(),
                entity: Some(serde_json::json!({"type": "node", "id": "1"})),
                redirect: None,
                jsonapi_url: None,
                data_url: None,
                headless: true,
                drupal_url: None,
            })
        }
    }

    fn record(id: &str, target: &str) -> MenuLinkRecord {
        MenuLinkRecord {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            target: target.to_string(),
            enabled: true,
            expanded: false,
            parent: None,
            weight: 0,
            access: None,
            children: Vec::new(),
        }
    }

    fn ctx<'a>(
        urls: &'a dyn UrlResolver,
        resolver: &'a dyn ContentResolver,
        include_resolve: bool,
    ) -> BuildContext<'a> {
        BuildContext {
            urls,
            resolver,
            base_url: "https://backend.example",
            langcode: None,
            include_resolve,
        }
    }

    #[test]
    fn denied_records_skipped_with_subtree() {
        let mut parent = record("parent", "/hidden");
        parent.access = Some("denied".to_string());
        parent.children.push(record("child", "/hidden/child"));
        let records = vec![parent, record("visible", "/visible")];

        let mut cache = CacheMetadata::new();
        let items = build_tree(&records, &ctx(&SchemeUrls, &NoResolver, false), &mut cache)
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "visible");
        // The denied link still contributed its tag; its child was never visited.
        assert!(cache.tags.contains("menu_link:parent"));
        assert!(!cache.tags.contains("menu_link:child"));
    }

    #[test]
    fn malformed_access_decision_is_fatal() {
        let mut rec = record("weird", "/x");
        rec.access = Some("maybe".to_string());
        let mut cache = CacheMetadata::new();
        let err = build_tree(&[rec], &ctx(&SchemeUrls, &NoResolver, false), &mut cache)
            .unwrap_err();
        assert!(matches!(err, MenuError::AccessContract { .. }));
    }

    #[test]
    fn internal_urls_normalized_external_kept_raw() {
        let records = vec![
            record("a", "about-us/"),
            record("ext", "https://example.com/x/"),
        ];
        let mut cache = CacheMetadata::new();
        let items = build_tree(&records, &ctx(&SchemeUrls, &NoResolver, false), &mut cache)
            .unwrap();
        assert_eq!(items[0].url, "/about-us");
        assert!(!items[0].external);
        assert_eq!(items[1].url, "https://example.com/x/");
        assert!(items[1].external);
    }

    #[test]
    fn external_links_never_resolve() {
        let records = vec![record("ext", "https://example.com")];
        let mut cache = CacheMetadata::new();
        let items = build_tree(&records, &ctx(&SchemeUrls, &EntityResolver, true), &mut cache)
            .unwrap();
        assert!(items[0].resolve.is_none());
    }

    #[test]
    fn resolution_disabled_yields_null_resolve() {
        let records = vec![record("a", "/about-us")];
        let mut cache = CacheMetadata::new();
        let items = build_tree(&records, &ctx(&SchemeUrls, &EntityResolver, false), &mut cache)
            .unwrap();
        assert!(items[0].resolve.is_none());
    }

    #[test]
    fn resolver_outcome_attached_with_cacheability() {
        let records = vec![record("a", "/about-us")];
        let mut cache = CacheMetadata::new();
        let items = build_tree(&records, &ctx(&SchemeUrls, &EntityResolver, true), &mut cache)
            .unwrap();
        let info = items[0].resolve.as_ref().unwrap();
        assert!(info.resolved);
        assert_eq!(info.kind, ResolveKind::Entity);
        assert!(cache.tags.contains("node:1"));
    }

    #[test]
    fn unresolved_internal_link_gets_route_fallback() {
        let records = vec![record("login", "/user/login")];
        let mut cache = CacheMetadata::new();
        let items = build_tree(&records, &ctx(&SchemeUrls, &NoResolver, true), &mut cache)
            .unwrap();
        let info = items[0].resolve.as_ref().unwrap();
        assert!(info.resolved);
        assert_eq!(info.kind, ResolveKind::Route);
        assert_eq!(info.canonical, "/user/login");
        assert_eq!(
            info.drupal_url.as_deref(),
            Some("https://backend.example/user/login")
        );
    }

    #[test]
    fn children_preserve_order_and_flags_start_false() {
        let mut parent = record("parent", "/p");
        parent.children.push(record("c1", "/p/1"));
        parent.children.push(record("c2", "/p/2"));
        let mut cache = CacheMetadata::new();
        let items = build_tree(&[parent], &ctx(&SchemeUrls, &NoResolver, false), &mut cache)
            .unwrap();
        let ids: Vec<_> = items[0].children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2"]);
        assert!(!items[0].active && !items[0].in_active_trail);
    }
}
