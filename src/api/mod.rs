pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

// Re-export for convenience
pub use crate::infrastructure::app_state::AppState;

/// Upper bound for one request, oracle call included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Full application router: host protocol at `/`, JSON API under `/api`
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(routes::player::host_action))
        .nest("/api", routes::create_api_router(state.clone()))
        .route("/health", get(routes::health::health_handler))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
