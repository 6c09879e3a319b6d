use axum::Router;

use crate::config::AppConfig;

mod cors;
mod headers;
mod request_id;
mod trace;

pub fn wrap(router: Router, cfg: &AppConfig) -> Router {
    router
        .layer(request_id::layer())
        .layer(trace::layer())
        .layer(cors::layer(&cfg.cors))
        .layer(headers::layer())
}
