//! Route definitions for `/account`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes mounted at `/account`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(account::create))
        .route("/login", get(account::login))
        .route("/status", get(account::get_status).post(account::set_status))
        .route("/characters", get(account::list_characters))
}
