//! Request extractors that turn malformed input into `HttpError::Validation`.
//!
//! Axum's stock `Json` and `Path` extractors reject with a mix of 400, 415
//! and 422 responses. Every one of those cases is a malformed-input outcome
//! here, so these wrappers funnel them all into a single 422.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use itemstore_core::{ItemId, validate_id};

use crate::error::HttpError;

/// JSON body extractor whose rejections are all 422.
///
/// Deserializing into `itemstore_core::Item` runs field validation, so a
/// handler receiving `ValidJson<Item>` only ever sees a valid item.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(&rejection)),
        }
    }
}

fn json_rejection(rejection: &JsonRejection) -> HttpError {
    tracing::debug!(status = %rejection.status(), "Rejected request body");
    HttpError::Validation(rejection.body_text())
}

/// The `{id}` path segment, parsed as an integer key >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemIdPath(pub ItemId);

impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| HttpError::Validation(rejection.body_text()))?;

        validate_id(raw)
            .map(Self)
            .map_err(|err| HttpError::Validation(err.to_string()))
    }
}
