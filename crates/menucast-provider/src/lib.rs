//! menucast-provider
//!
//! Concrete implementations of the collaborator seams defined by
//! `menucast-core`:
//! - a static, fixture-backed menu provider with depth/root/enabled
//!   filtering
//! - a site-relative URL resolver that separates internal from external
//!   targets by host
//! - static and null content resolvers
//!
//! The API layer wires these from configuration; tests use them directly.
//! All of them are plain data behind the core's traits, safe to share
//! across request tasks.

#![forbid(unsafe_code)]

pub mod content;
pub mod site_url;
pub mod static_menu;

pub use content::{NullContentResolver, ResolverEntry, ResolverFixture, StaticContentResolver};
pub use site_url::SiteUrlResolver;
pub use static_menu::{MenuFixture, StaticMenuProvider};
