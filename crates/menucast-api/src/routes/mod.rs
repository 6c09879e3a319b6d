use axum::routing::get;
use axum::Router;

use crate::state::AppState;

mod health;
mod menu;

pub fn router() -> Router<AppState> {
    let v1 = Router::new().route("/menus/:menu", get(menu::get_menu));

    Router::new()
        .route("/healthz", get(health::healthz))
        .nest("/v1", v1)
}
