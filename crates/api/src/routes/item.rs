use axum::routing::get;
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Routes mounted at `/item`.
///
/// The nested `/` route answers `/item` itself.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(item::get_by_id).post(item::create))
        .route("/all", get(item::list))
}
