//! Seed handler - resets the store to the sample data.

use axum::Json;
use axum::extract::State;

use crate::dto::SeedResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Clear the store and load the sample items.
pub async fn seed(State(state): State<AppState>) -> Result<Json<SeedResponse>, HttpError> {
    let total = state.core.items().seed().await?;
    Ok(Json(SeedResponse::loaded(total)))
}
