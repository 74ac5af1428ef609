//! Success helpers shared by API handlers.
//!
//! Successful responses carry the payload itself as the JSON body: a list,
//! a boolean, a status string, or [`SUCCESS_MARKER`]. Errors use
//! `{ "error": ..., "code": ... }` (see [`crate::error::AppError`]).

use axum::http::StatusCode;
use axum::Json;

/// Payload returned by routes that have nothing else to report.
pub const SUCCESS_MARKER: &str = "OPERATION SUCCESSFUL";

/// `200 OK` carrying the success marker.
pub fn success() -> Json<&'static str> {
    Json(SUCCESS_MARKER)
}

/// `201 Created` carrying the success marker.
pub fn created() -> (StatusCode, Json<&'static str>) {
    (StatusCode::CREATED, success())
}
