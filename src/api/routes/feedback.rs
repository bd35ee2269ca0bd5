use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::AppState;
use crate::domain::value_objects::{AdaptiveFactors, FeedbackStats};

#[derive(Debug, Serialize)]
pub struct FactorsResponse {
    pub enabled: bool,
    pub factors: AdaptiveFactors,
    pub stats: Option<FeedbackStats>,
    pub refreshes: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// GET /api/factors - Current adaptive factors
pub async fn get_factors(State(state): State<Arc<AppState>>) -> Json<FactorsResponse> {
    let snapshot = state.feedback.snapshot().await;

    Json(FactorsResponse {
        enabled: state.feedback.is_enabled(),
        factors: snapshot.factors,
        stats: snapshot.stats,
        refreshes: snapshot.refreshes,
        refreshed_at: snapshot.refreshed_at,
    })
}
