use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::infrastructure::app_state::AppState;
use crate::infrastructure::config::VERSION;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    player: String,
    ranking_configured: bool,
    feedback_enabled: bool,
    uptime_seconds: u64,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
        player: state.config.player_name.clone(),
        ranking_configured: state.oracle.is_configured(),
        feedback_enabled: state.feedback.is_enabled(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
