use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cache::Cache;
use crate::config::EngineConfig;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::services::providers::VideoProvider;

pub mod analyze;
pub mod videos;

/// Shared application state
pub struct AppState {
    pub engine: EngineConfig,
    pub provider: Arc<dyn VideoProvider>,
    pub cache: Cache,
}

/// Creates the application router with all routes
///
/// Layers run top to bottom. The request-id middleware sits outside the
/// trace layer so the span it creates can pick the ID up from request
/// extensions.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(Arc::new(state))
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(analyze::analyze_record))
        .route("/analysis", get(analyze::analyze_by_reference))
        .route("/videos/:id", get(videos::get_video))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
