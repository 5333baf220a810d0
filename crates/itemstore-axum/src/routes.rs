//! Route definitions and router construction.

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::dto::ServiceInfo;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => CorsLayer::new()
            .allow_origin(parse_origins(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

/// Parse configured origins into header values, skipping unparseable ones.
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

/// Item routes.
///
/// `/items/` is accepted as an alias of the collection route.
pub(crate) fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handlers::items::list).post(handlers::items::create),
        )
        .route(
            "/items/",
            get(handlers::items::list).post(handlers::items::create),
        )
        .route(
            "/items/{id}",
            get(handlers::items::get)
                .put(handlers::items::replace)
                .delete(handlers::items::remove),
        )
        .route("/_seed", post(handlers::seed::seed))
}

/// Create the main Axum router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .merge(item_routes())
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_origins_are_skipped() {
        let origins = vec![
            "http://a.test".to_string(),
            "http://bad\norigin".to_string(),
            "http://b.test".to_string(),
        ];

        let parsed = parse_origins(&origins);
        assert_eq!(
            parsed,
            vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ]
        );
    }
}
