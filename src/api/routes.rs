//! Application route configuration.

use axum::{middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::admin_routes;
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState, max_in_flight: usize) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Protected admin routes (require a resolvable caller identity)
        .nest(
            "/admin",
            admin_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        // Global in-flight cap; excess requests queue
        .layer(ConcurrencyLimitLayer::new(max_in_flight))
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Staff Password Service"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness probe. Both collaborators are managed remote APIs, so there is
/// no local dependency to check.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
