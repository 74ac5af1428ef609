use axum::routing::get;
use axum::Router;

use crate::handlers::inventory;
use crate::state::AppState;

/// Routes mounted at `/inventory`.
pub fn router() -> Router<AppState> {
    Router::new().route("/all", get(inventory::list).post(inventory::replace))
}
