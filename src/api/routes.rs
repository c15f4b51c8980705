use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::routes::{movies, ratings, recommendations, users};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Catalog
        .route("/api/movies/by-genre", get(movies::by_genre))
        .route("/api/movies/genre/:genre", get(movies::genre_rail))
        .route("/api/movies/:show_id", get(movies::detail))
        // Admin-only user reporting view
        .route("/api/users", get(users::list))
        // Precomputed recommendations
        .route("/api/recommendations/home/:user_id", get(recommendations::home))
        .route("/api/recommendations/related/:show_id", get(recommendations::related))
        // Ratings
        .route("/api/ratings", post(ratings::submit))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
