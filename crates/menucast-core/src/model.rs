//! Wire model for menu trees.
//!
//! `MenuLinkRecord` is the input shape owned by the external menu provider:
//! an ordered, access-filtered tree of link records. `MenuItem` is the
//! output shape handed to the serialization boundary. `ResolveInfo`
//! describes what backend entity or route a link points to and is opaque
//! to the core beyond its `resolved` flag and `kind` tag.
//!
//! The id space is flat: ids are plugin identifiers, unique across the
//! whole tree even though items nest.

use serde::{Deserialize, Serialize};

use crate::path;

/// One link in the provider's access-filtered menu tree.
///
/// Records arrive pre-sorted by `weight`; the core never re-orders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLinkRecord {
    /// Plugin identifier, unique within the menu.
    pub id: String,
    /// Link title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Link target: an internal path or an external URL string.
    pub target: String,
    /// Whether the link is enabled. Disabled links are pruned when the
    /// provider is asked for enabled links only.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether the link is marked as expanded.
    #[serde(default)]
    pub expanded: bool,
    /// Parent plugin identifier; absent for root links.
    #[serde(default)]
    pub parent: Option<String>,
    /// Sort weight. Informational only; the provider pre-sorts.
    #[serde(default)]
    pub weight: i32,
    /// Access decision from the upstream access check: absent means
    /// allowed, `"allowed"` and `"denied"` are recognized, anything else
    /// is a contract violation and aborts the build.
    #[serde(default)]
    pub access: Option<String>,
    /// Ordered child records.
    #[serde(default)]
    pub children: Vec<MenuLinkRecord>,
}

fn default_true() -> bool {
    true
}

/// What kind of backend target a link resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveKind {
    /// A content entity.
    Entity,
    /// A redirect to another location.
    Redirect,
    /// A plain route with no entity behind it.
    Route,
    /// A resolver-defined kind this core does not interpret.
    #[serde(untagged)]
    Other(String),
}

/// Resolution metadata for an internal link.
///
/// Produced by the external content resolver, or synthesized as a route
/// fallback when the resolver reports "not resolved".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveInfo {
    /// Whether the target resolved (always true after fallback synthesis).
    pub resolved: bool,
    /// Kind tag making the fallback rule a total function.
    pub kind: ResolveKind,
    /// Canonical path of the target.
    pub canonical: String,
    /// Resolved entity payload, when `kind` is `entity`.
    #[serde(default)]
    pub entity: Option<serde_json::Value>,
    /// Redirect payload, when `kind` is `redirect`.
    #[serde(default)]
    pub redirect: Option<serde_json::Value>,
    /// JSON:API URL for the target, when the resolver provides one.
    #[serde(default)]
    pub jsonapi_url: Option<String>,
    /// Raw data URL for the target, when the resolver provides one.
    #[serde(default)]
    pub data_url: Option<String>,
    /// Whether the target is served headless.
    #[serde(default)]
    pub headless: bool,
    /// Fully-qualified backend URL for the target.
    #[serde(default)]
    pub drupal_url: Option<String>,
}

impl ResolveInfo {
    /// Synthesize the deterministic fallback for an internal link the
    /// resolver could not map: a plain route at the link's canonical path.
    pub fn route_fallback(url: &str, base_url: &str) -> Self {
        let canonical = path::normalize_match_path(url);
        let drupal_url = format!("{}{}", base_url.trim_end_matches('/'), canonical);
        Self {
            resolved: true,
            kind: ResolveKind::Route,
            canonical,
            entity: None,
            redirect: None,
            jsonapi_url: None,
            data_url: None,
            headless: false,
            drupal_url: Some(drupal_url),
        }
    }
}

/// One node of the output tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable id, unique across the response tree.
    pub id: String,
    /// Link title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Normalized path+query for internal links, or the raw external URL.
    pub url: String,
    /// Whether the target is external to the site.
    pub external: bool,
    /// Whether the link is marked as expanded.
    pub expanded: bool,
    /// Parent id; null for root items.
    pub parent: Option<String>,
    /// Sort weight, carried through from the record.
    pub weight: i32,
    /// True for at most one item in the tree.
    pub active: bool,
    /// True for the active item and all of its ancestors.
    pub in_active_trail: bool,
    /// Resolution metadata; null when external or resolution is disabled.
    pub resolve: Option<ResolveInfo>,
    /// Ordered child items, mirroring the input order.
    pub children: Vec<MenuItem>,
}
