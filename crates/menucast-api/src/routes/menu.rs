use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;

use menucast_core::{
    apply_flags, build_tree, compute_trail, normalize_match_path, BuildContext, CacheMetadata,
    TreeParams,
};

use crate::dto::requests::MenuQuery;
use crate::dto::responses::{MenuMeta, MenuResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// The request orchestrator: load the filtered tree, build items, compute
/// and apply the active trail when a path is targeted, then assemble the
/// envelope and cache headers.
pub async fn get_menu(
    State(state): State<AppState>,
    Path(menu): Path<String>,
    Query(query): Query<MenuQuery>,
    request_headers: HeaderMap,
) -> ApiResult<Response> {
    let params = TreeParams {
        only_enabled: true,
        min_depth: query.min_depth,
        max_depth: query.max_depth,
        root_id: query.parent.clone(),
    };
    let records = state
        .menus
        .load_tree(&menu, &params)
        .ok_or(ApiError::MenuNotFound)?;

    let mut cache = CacheMetadata::new();
    cache.add_tag(format!("menu:{menu}"));

    let include_resolve = query.resolve_enabled();
    let ctx = BuildContext {
        urls: state.urls.as_ref(),
        resolver: state.resolver.as_ref(),
        base_url: &state.cfg.base_url,
        langcode: query.langcode.as_deref(),
        include_resolve,
    };
    let mut items = build_tree(&records, &ctx, &mut cache)?;

    // An absent or unusable path means no active-trail targeting.
    let target = query
        .path
        .as_deref()
        .map(normalize_match_path)
        .unwrap_or_default();
    let trail = if target.is_empty() {
        Vec::new()
    } else {
        compute_trail(&items, &target)
    };
    apply_flags(&mut items, &trail);

    let max_age = if is_anonymous(&request_headers) {
        cache.effective_max_age(state.cfg.cache_max_age)
    } else {
        0
    };

    let body = MenuResponse {
        data: items,
        meta: MenuMeta {
            menu,
            active_trail: trail,
            langcode: query.langcode,
            path: if target.is_empty() { None } else { Some(target) },
            resolve: include_resolve,
        },
    };

    let mut resp = Json(body).into_response();
    resp.headers_mut()
        .insert(header::CACHE_CONTROL, cache_control(max_age));
    Ok(resp)
}

/// Anything that looks like an authenticated caller disables caching: an
/// Authorization header or a session cookie.
fn is_anonymous(headers: &HeaderMap) -> bool {
    if headers.contains_key(header::AUTHORIZATION) {
        return false;
    }
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        if cookies
            .split(';')
            .any(|pair| pair.trim_start().starts_with("SESS"))
        {
            return false;
        }
    }
    true
}

fn cache_control(max_age: u32) -> HeaderValue {
    if max_age > 0 {
        HeaderValue::from_str(&format!("public, max-age={max_age}"))
            .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
    } else {
        HeaderValue::from_static("no-store")
    }
}
