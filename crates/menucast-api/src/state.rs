use std::sync::Arc;

use menucast_core::{ContentResolver, MenuProvider, UrlResolver};
use menucast_provider::{
    MenuFixture, NullContentResolver, ResolverFixture, SiteUrlResolver, StaticContentResolver,
    StaticMenuProvider,
};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<AppConfig>,
    pub menus: Arc<dyn MenuProvider + Send + Sync>,
    pub urls: Arc<dyn UrlResolver + Send + Sync>,
    pub resolver: Arc<dyn ContentResolver + Send + Sync>,
}

impl AppState {
    pub fn new(cfg: AppConfig, menus: MenuFixture, resolver: Option<ResolverFixture>) -> Self {
        let urls = SiteUrlResolver::new(cfg.site_host.clone());
        let resolver: Arc<dyn ContentResolver + Send + Sync> = match resolver {
            Some(fixture) => Arc::new(StaticContentResolver::new(fixture)),
            None => Arc::new(NullContentResolver),
        };

        Self {
            cfg: Arc::new(cfg),
            menus: Arc::new(StaticMenuProvider::new(menus)),
            urls: Arc::new(urls),
            resolver,
        }
    }
}
