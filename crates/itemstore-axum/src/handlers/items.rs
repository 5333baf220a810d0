//! Item handlers - CRUD operations on the item store.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use itemstore_core::Item;

use crate::error::HttpError;
use crate::extract::{ItemIdPath, ValidJson};
use crate::state::AppState;

/// List all items.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Item>>, HttpError> {
    Ok(Json(state.core.items().list().await?))
}

/// Create a new item.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(item): ValidJson<Item>,
) -> Result<(StatusCode, Json<Item>), HttpError> {
    let created = state.core.items().create(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single item by id.
pub async fn get(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
) -> Result<Json<Item>, HttpError> {
    Ok(Json(state.core.items().get(id).await?))
}

/// Replace an item. The body must carry the same id as the path.
pub async fn replace(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
    ValidJson(item): ValidJson<Item>,
) -> Result<Json<Item>, HttpError> {
    Ok(Json(state.core.items().replace(id, item).await?))
}

/// Delete an item.
pub async fn remove(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
) -> Result<StatusCode, HttpError> {
    state.core.items().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
