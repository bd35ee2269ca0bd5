pub mod feedback;
pub mod health;
pub mod player;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::AppState;

/// Create the JSON API router
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/bet", post(player::bet))
        .route("/showdown", post(player::showdown))
        .route("/version", get(player::version))
        .route("/factors", get(feedback::get_factors))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
