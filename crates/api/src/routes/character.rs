//! Route definitions for `/character`.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/character`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(character::create))
        .route("/delete", delete(character::delete))
}
