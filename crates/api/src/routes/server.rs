//! Route definitions for `/server`.

use axum::routing::get;
use axum::Router;

use crate::handlers::server;
use crate::state::AppState;

/// Routes mounted at `/server`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(server::get_status).post(server::set_status))
        .route("/characters", get(server::list_characters))
}
