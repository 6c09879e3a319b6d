//! Site-relative URL resolution.
//!
//! Decides whether a link target leaves the site: any `scheme://host` pair
//! whose host differs from the configured site host is external. Targets
//! without a scheme, and absolute URLs pointing at the site's own host,
//! are internal; the core normalizes them afterwards, which strips the
//! scheme and host anyway. Purely string-based, like the rest of the
//! normalization stack.

use menucast_core::{MenuLinkRecord, ResolvedUrl, UrlResolver};

/// URL resolver anchored at one site host.
#[derive(Debug, Clone, Default)]
pub struct SiteUrlResolver {
    site_host: Option<String>,
}

impl SiteUrlResolver {
    /// Create a resolver. With no site host configured, every absolute
    /// URL counts as external.
    pub fn new(site_host: Option<String>) -> Self {
        Self { site_host }
    }
}

impl UrlResolver for SiteUrlResolver {
    fn resolve_url(&self, record: &MenuLinkRecord) -> ResolvedUrl {
        let external = match split_host(&record.target) {
            Some(host) => !self
                .site_host
                .as_deref()
                .is_some_and(|site| site.eq_ignore_ascii_case(host)),
            None => false,
        };
        ResolvedUrl {
            external,
            url: record.target.clone(),
        }
    }
}

/// Extract the host of a `scheme://host...` target, or `None` when the
/// target has no valid scheme prefix.
fn split_host(target: &str) -> Option<&str> {
    let (scheme, rest) = target.split_once("://")?;
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
    {
        return None;
    }
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let host = &rest[..end];
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(target: &str) -> MenuLinkRecord {
        MenuLinkRecord {
            id: "x".to_string(),
            title: "x".to_string(),
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

    #[test]
    fn relative_targets_are_internal() {
        let r = SiteUrlResolver::new(Some("site.example".to_string()));
        let resolved = r.resolve_url(&record("/about-us"));
        assert!(!resolved.external);
        assert_eq!(resolved.url, "/about-us");
    }

    #[test]
    fn own_host_is_internal_other_hosts_external() {
        let r = SiteUrlResolver::new(Some("site.example".to_string()));
        assert!(!r.resolve_url(&record("https://site.example/about-us")).external);
        assert!(!r.resolve_url(&record("https://SITE.example/about-us")).external);
        assert!(r.resolve_url(&record("https://example.com")).external);
    }

    #[test]
    fn without_site_host_every_absolute_url_is_external() {
        let r = SiteUrlResolver::new(None);
        assert!(r.resolve_url(&record("https://site.example/x")).external);
        assert!(!r.resolve_url(&record("/x")).external);
    }

    #[test]
    fn scheme_marker_in_query_does_not_make_it_external() {
        let r = SiteUrlResolver::new(None);
        assert!(!r.resolve_url(&record("/go?to=https://x.example")).external);
    }
}
