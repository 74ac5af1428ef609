//! JSON body extractor that reports failures through [`AppError`].

use axum::extract::{FromRequest, Request};
use axum::Json;
use realmkeep_core::error::CoreError;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Like [`axum::Json`], but a missing, malformed, or mistyped body becomes a
/// `400 VALIDATION_ERROR` in the standard error shape.
///
/// Bodies are read on every method, including `GET` and `DELETE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::Core(CoreError::Validation(
                rejection.body_text(),
            ))),
        }
    }
}
