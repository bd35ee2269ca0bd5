use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Form, Json};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::application::betting::{
    BetRequest, BetRequestError, BetRequestInput, BetRequestOutput, Showdown, ShowdownInput,
};
use crate::domain::value_objects::{AdaptiveFactors, GameState, Phase};
use crate::infrastructure::config::VERSION;

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Form posted by the tournament host
#[derive(Debug, Deserialize)]
pub struct HostForm {
    pub action: String,
    #[serde(default)]
    pub game_state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BetResponse {
    pub bet: u32,
    pub action: &'static str,
    pub phase: Phase,
    pub reason: &'static str,
    pub factors: AdaptiveFactors,
}

#[derive(Debug, Serialize)]
pub struct ShowdownResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: &str, code: &str, details: Option<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            code: code.to_string(),
            details,
        }),
    )
}

fn parse_game_state(raw: Option<&str>) -> Result<GameState, ApiError> {
    let raw = raw.ok_or_else(|| {
        error_response(
            StatusCode::BAD_REQUEST,
            "game_state is required",
            "MISSING_GAME_STATE",
            None,
        )
    })?;

    serde_json::from_str(raw).map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            "Invalid game state",
            "INVALID_GAME_STATE",
            Some(e.to_string()),
        )
    })
}

async fn place_bet(state: &AppState, game_state: GameState) -> Result<BetRequestOutput, ApiError> {
    let use_case = BetRequest::new(
        state.policy.clone(),
        state.oracle.clone(),
        state.feedback.clone(),
        state.config.player_name.clone(),
    );

    use_case
        .execute(BetRequestInput { game_state })
        .await
        .map_err(|e| match e {
            BetRequestError::OwnPlayerNotFound(_) => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &e.to_string(),
                "OWN_PLAYER_NOT_FOUND",
                None,
            ),
        })
}

fn record_showdown(state: &AppState, game_state: GameState) {
    Showdown::new(state.feedback.clone()).execute(ShowdownInput { game_state });
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST / - Tournament host protocol
pub async fn host_action(
    State(state): State<Arc<AppState>>,
    Form(form): Form<HostForm>,
) -> Result<String, ApiError> {
    match form.action.as_str() {
        "bet_request" => {
            let game_state = parse_game_state(form.game_state.as_deref())?;
            let output = place_bet(&state, game_state).await?;
            Ok(output.amount().to_string())
        }
        "showdown" => {
            let game_state = parse_game_state(form.game_state.as_deref())?;
            record_showdown(&state, game_state);
            Ok("OK".to_string())
        }
        "version" => Ok(VERSION.to_string()),
        "check" => Ok("OK".to_string()),
        other => Err(error_response(
            StatusCode::BAD_REQUEST,
            "Unknown action",
            "UNKNOWN_ACTION",
            Some(other.to_string()),
        )),
    }
}

/// POST /api/bet - Decide a bet and explain it
pub async fn bet(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<BetResponse>, ApiError> {
    let game_state = parse_game_state(Some(&body))?;
    let output = place_bet(&state, game_state).await?;

    Ok(Json(BetResponse {
        bet: output.amount(),
        action: output.decision.bet.as_str(),
        phase: output.phase,
        reason: output.decision.reason,
        factors: output.factors,
    }))
}

/// POST /api/showdown - Record a finished game
pub async fn showdown(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<ShowdownResponse>, ApiError> {
    let game_state = parse_game_state(Some(&body))?;
    record_showdown(&state, game_state);

    Ok(Json(ShowdownResponse { success: true }))
}

/// GET /api/version
pub async fn version(State(state): State<Arc<AppState>>) -> Json<VersionResponse> {
    Json(VersionResponse {
        name: state.config.player_name.clone(),
        version: VERSION,
    })
}
