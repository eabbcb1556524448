use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub mod resources;

pub const HEALTH_PATH: &str = "/api/v1/health";
pub const ITEMS_PATH: &str = "/api/v1/items";
pub const CLIENTS_PATH: &str = "/api/v1/clients";

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn fallback() -> JsonApiError {
    JsonApiError::not_found("route not found")
}

async fn method_not_allowed() -> JsonApiError {
    JsonApiError::method_not_allowed()
}

/// Method and path of every registered endpoint, for startup logging.
pub fn route_table() -> Vec<(&'static str, String)> {
    let mut table = vec![("GET", HEALTH_PATH.to_string())];
    for base in [ITEMS_PATH, CLIENTS_PATH] {
        table.push(("GET", base.to_string()));
        table.push(("POST", base.to_string()));
        for method in ["GET", "PUT", "DELETE"] {
            table.push((method, format!("{base}/{{id}}")));
        }
    }
    table
}

/// Build the full application router: health plus one CRUD collection per
/// resource, wrapped in CORS and request tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .merge(resources::resource_router(ITEMS_PATH, state.items))
        .merge(resources::resource_router(CLIENTS_PATH, state.clients))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
