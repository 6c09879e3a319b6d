//! menucast-core
//!
//! This crate provides the request-scoped core for rendering hierarchical
//! navigation menus for a headless frontend:
//! - canonical path/URL normalization
//! - transformation of an access-filtered link tree into an output item tree
//! - active-trail computation against a requested path
//! - active / in-active-trail flag application
//! - cacheability metadata collection as an explicit side channel
//!
//! Design principles:
//! - deterministic: same input tree and target path -> same output
//! - no I/O, no async, no global state; all collaborators enter as traits
//! - a request builds one tree, derives one trail, then mutates flags once
//!
//! Non-goals:
//! - menu storage or per-link access control (the provider pre-filters)
//! - resolving what an internal path points to (pluggable collaborator)
//! - HTTP transport, caching headers, serialization envelopes

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod build;
pub mod cache;
pub mod collaborators;
pub mod errors;
pub mod flags;
pub mod model;
pub mod path;
pub mod trail;

pub use build::{build_tree, BuildContext};
pub use cache::CacheMetadata;
pub use collaborators::{
    ContentResolver, MenuProvider, ResolveOutcome, ResolvedUrl, TreeParams, UrlResolver,
};
pub use errors::{MenuError, MenuResult};
pub use flags::apply_flags;
pub use model::{MenuItem, MenuLinkRecord, ResolveInfo, ResolveKind};
pub use path::{normalize, normalize_link_url, normalize_match_path};
pub use trail::compute_trail;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
