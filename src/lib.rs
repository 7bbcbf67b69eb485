pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod openapi;
pub mod services;
pub mod store;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

/// Versioned API routes.
pub fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/cart", handlers::cart::routes())
        .nest("/wishlist", handlers::wishlist::routes())
}

/// The full application router: banner, health, v1 API, Swagger UI and
/// request tracing. CORS is layered on top by the binary, where the
/// environment is known.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "cart-wishlist-api up" }))
        .route("/health", get(health))
        .nest("/api/v1", api_v1_routes())
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok" })),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "status": "unavailable", "error": err.to_string() })),
        ),
    }
}
