use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use realmkeep_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for anything the
/// driver reports. Implements [`IntoResponse`] to produce one JSON error
/// shape, `{ "error": ..., "code": ... }`, for every route.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `realmkeep_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database or pool error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const UNAVAILABLE_MESSAGE: &str = "The data store is temporarily unavailable";
const STORE_ERROR_MESSAGE: &str = "The data store could not complete the request";
const INVALID_DATA_MESSAGE: &str = "Request contains a value the data store cannot accept";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let core = match self {
            AppError::Core(core) => core,
            AppError::Database(err) => classify_sqlx_error(&err),
        };
        let (status, code, message) = classify_core_error(&core);
        error_response(status, code, message)
    }
}

fn error_response(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });

    (status, axum::Json(body)).into_response()
}

/// Response for a handler panic caught by `CatchPanicLayer`.
///
/// The panic payload is logged; the client gets `500 INTERNAL_ERROR`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "Handler panicked");

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "Internal server error".to_string(),
    )
}

/// Map a domain error to an HTTP status, error code, and client-facing
/// message. Store failures are logged with their detail and answered with a
/// fixed message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::ConstraintViolation(msg) => {
            (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION", msg.clone())
        }
        CoreError::Unavailable(msg) => {
            tracing::warn!(error = %msg, "Store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORE_UNAVAILABLE",
                UNAVAILABLE_MESSAGE.to_string(),
            )
        }
        CoreError::Store(msg) => {
            tracing::error!(error = %msg, "Store error");
            (
                StatusCode::BAD_GATEWAY,
                "STORE_ERROR",
                STORE_ERROR_MESSAGE.to_string(),
            )
        }
    }
}

/// How a PostgreSQL SQLSTATE is surfaced to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlStateClass {
    /// Class 22: a bound value was rejected (bad encoding, out of range).
    InvalidData,
    /// Class 23: unique, foreign key, not-null, check, exclusion.
    Constraint,
    /// Connection loss, resource exhaustion, cancellation/timeout,
    /// serialization failures. Safe for the caller to retry.
    Transient,
    /// Anything else.
    Other,
}

/// Classify a SQLSTATE code by its two-character class.
pub fn classify_sqlstate(code: &str) -> SqlStateClass {
    match code.get(..2) {
        Some("22") => SqlStateClass::InvalidData,
        Some("23") => SqlStateClass::Constraint,
        Some("08" | "40" | "53" | "57") => SqlStateClass::Transient,
        _ => SqlStateClass::Other,
    }
}

/// Classify a sqlx error into the domain taxonomy.
///
/// - `RowNotFound` becomes `NotFound`.
/// - Data exceptions on bound values become `Validation`.
/// - Constraint violations become `ConstraintViolation` naming only the
///   constraint.
/// - Pool exhaustion, closed pool, I/O, and transient SQLSTATEs become
///   `Unavailable`.
/// - Everything else becomes `Store`.
///
/// Driver text is carried only in `Unavailable` and `Store`, which are
/// logged and never echoed to clients.
pub fn classify_sqlx_error(err: &sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::RowNotFound => CoreError::NotFound {
            entity: "Row",
            key: "matching request".to_string(),
        },
        sqlx::Error::Database(db_err) => {
            let sqlstate = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
            match classify_sqlstate(&sqlstate) {
                SqlStateClass::InvalidData => {
                    tracing::debug!(error = %db_err, %sqlstate, "Rejected bound value");
                    CoreError::Validation(format!("{INVALID_DATA_MESSAGE} (SQLSTATE {sqlstate})"))
                }
                SqlStateClass::Constraint => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    tracing::debug!(error = %db_err, %sqlstate, constraint, "Constraint violation");
                    CoreError::ConstraintViolation(format!(
                        "Request violates constraint: {constraint}"
                    ))
                }
                SqlStateClass::Transient => {
                    CoreError::Unavailable(format!("SQLSTATE {sqlstate}: {db_err}"))
                }
                SqlStateClass::Other => CoreError::Store(format!("SQLSTATE {sqlstate}: {db_err}")),
            }
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => CoreError::Unavailable(err.to_string()),
        other => CoreError::Store(other.to_string()),
    }
}
