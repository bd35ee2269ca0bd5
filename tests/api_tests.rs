//! API Integration Tests for the Donkey Killers player service
//!
//! Drives the full router with stub ranking and game log services.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::{Service, ServiceExt};

use donkey_killers::api;
use donkey_killers::domain::value_objects::PolicyTable;
use donkey_killers::infrastructure::app_state::AppState;
use donkey_killers::infrastructure::config::PlayerConfig;
use donkey_killers::infrastructure::services::{RankingService, StaticRankingService};

fn test_config() -> PlayerConfig {
    PlayerConfig {
        port: 0,
        player_name: "the donkey killers".to_string(),
        ranking_url: None,
        ranking_timeout_secs: 1,
        game_log_url: String::new(),
        game_log_timeout_secs: 1,
        feedback_enabled: false,
        policy_table_path: None,
    }
}

/// Helper to create a test application
fn create_test_app(ranking: Option<Arc<dyn RankingService>>) -> Router {
    let state = AppState::with_services(test_config(), PolicyTable::default(), ranking, None);
    api::create_router(Arc::new(state))
}

async fn send(app: &mut Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = ServiceExt::<Request<Body>>::ready(app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, body_bytes.to_vec())
}

/// Helper to make a POST request with JSON body
async fn post_json(app: &mut Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let (status, bytes) = send(app, request).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Helper to post the host's form protocol
async fn post_form(app: &mut Router, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let (status, bytes) = send(app, request).await;
    (status, String::from_utf8(bytes).unwrap())
}

async fn get_json(app: &mut Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let (status, bytes) = send(app, request).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn urlencode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

fn card(rank: &str, suit: &str) -> Value {
    json!({"rank": rank, "suit": suit})
}

fn game_state(
    current_buy_in: u32,
    minimum_raise: u32,
    hole_cards: Option<Value>,
    community_cards: Value,
    other_bet: u32,
) -> Value {
    let mut me = json!({
        "id": 1,
        "name": "The Donkey Killers",
        "status": "active",
        "version": "1.0",
        "stack": 1000,
        "bet": 0
    });
    if let Some(cards) = hole_cards {
        me["hole_cards"] = cards;
    }

    json!({
        "tournament_id": "550d1d68cd7bd10003000003",
        "game_id": "550da1cb2d909006e90004b1",
        "round": 0,
        "bet_index": 0,
        "small_blind": 10,
        "current_buy_in": current_buy_in,
        "pot": current_buy_in,
        "minimum_raise": minimum_raise,
        "dealer": 0,
        "orbits": 0,
        "in_action": 1,
        "players": [
            {"id": 0, "name": "Albert", "status": "active", "version": "x", "stack": 1000, "bet": other_bet},
            me,
            {"id": 2, "name": "Chuck", "status": "active", "version": "x", "stack": 1000, "bet": 0}
        ],
        "community_cards": community_cards
    })
}

// ============================================================================
// Host protocol
// ============================================================================

#[tokio::test]
async fn test_opening_bet_without_cards_is_small_blind() {
    let mut app = create_test_app(None);
    let state = game_state(0, 20, None, json!([]), 0).to_string();

    let (status, body) = post_form(&mut app, &[("action", "bet_request"), ("game_state", &state)]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "10");
}

#[tokio::test]
async fn test_premium_pre_flop_bets_at_least_three_blinds() {
    let mut app = create_test_app(None);
    let hole = json!([card("K", "hearts"), card("A", "spades")]);
    let state = game_state(0, 20, Some(hole), json!([]), 0).to_string();

    let (status, body) = post_form(&mut app, &[("action", "bet_request"), ("game_state", &state)]).await;

    assert_eq!(status, StatusCode::OK);
    let bet: u32 = body.parse().unwrap();
    assert!(bet >= 30);
}

#[tokio::test]
async fn test_river_straight_raises_four_blinds() {
    let mut app = create_test_app(Some(Arc::new(StaticRankingService::new(0))));
    let hole = json!([card("10", "hearts"), card("J", "spades")]);
    let board = json!([
        card("Q", "clubs"),
        card("K", "diamonds"),
        card("A", "hearts"),
        card("2", "clubs"),
        card("3", "diamonds")
    ]);
    let state = game_state(20, 20, Some(hole), board, 20).to_string();

    let (status, body) = post_form(&mut app, &[("action", "bet_request"), ("game_state", &state)]).await;

    assert_eq!(status, StatusCode::OK);
    // current buy-in + max(4 small blinds, minimum raise)
    assert_eq!(body, "60");
}

#[tokio::test]
async fn test_bets_in_and_no_signal_is_zero() {
    let mut app = create_test_app(Some(Arc::new(StaticRankingService::unavailable())));
    let hole = json!([card("4", "hearts"), card("J", "spades")]);
    let board = json!([card("2", "clubs"), card("9", "diamonds"), card("K", "hearts")]);
    let state = game_state(40, 20, Some(hole), board, 40).to_string();

    let (status, body) = post_form(&mut app, &[("action", "bet_request"), ("game_state", &state)]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "0");
}

#[tokio::test]
async fn test_showdown_version_and_check() {
    let mut app = create_test_app(None);
    let state = game_state(0, 20, None, json!([]), 0).to_string();

    let (status, body) = post_form(&mut app, &[("action", "showdown"), ("game_state", &state)]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, body) = post_form(&mut app, &[("action", "version")]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Donkey Killers"));

    let (status, body) = post_form(&mut app, &[("action", "check")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_unknown_action() {
    let mut app = create_test_app(None);

    let (status, body) = post_form(&mut app, &[("action", "dance")]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], "UNKNOWN_ACTION");
}

#[tokio::test]
async fn test_malformed_game_state() {
    let mut app = create_test_app(None);

    let (status, body) =
        post_form(&mut app, &[("action", "bet_request"), ("game_state", "{not json")]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], "INVALID_GAME_STATE");
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn test_api_bet_explains_decision() {
    let mut app = create_test_app(None);
    let hole = json!([card("A", "hearts"), card("A", "spades")]);
    let state = game_state(0, 20, Some(hole), json!([]), 0);

    let (status, json) = post_json(&mut app, "/api/bet", state).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bet"], 30);
    assert_eq!(json["action"], "raise");
    assert_eq!(json["phase"], "pre_flop");
    assert_eq!(json["reason"], "premium hand");
    assert_eq!(json["factors"]["aggressiveness"], 1.0);
}

#[tokio::test]
async fn test_api_bet_own_player_not_found() {
    let mut app = create_test_app(None);
    let mut state = game_state(0, 20, None, json!([]), 0);
    state["players"][1]["name"] = json!("Somebody Else");

    let (status, json) = post_json(&mut app, "/api/bet", state).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "OWN_PLAYER_NOT_FOUND");
}

#[tokio::test]
async fn test_api_showdown() {
    let mut app = create_test_app(None);
    let state = game_state(0, 20, None, json!([]), 0);

    let (status, json) = post_json(&mut app, "/api/showdown", state).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_api_factors_start_neutral() {
    let mut app = create_test_app(None);

    let (status, json) = get_json(&mut app, "/api/factors").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled"], false);
    assert_eq!(json["factors"]["aggressiveness"], 1.0);
    assert_eq!(json["factors"]["looseness"], 1.0);
    assert_eq!(json["refreshes"], 0);
}

#[tokio::test]
async fn test_api_version_and_health() {
    let mut app = create_test_app(None);

    let (status, json) = get_json(&mut app, "/api/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "the donkey killers");

    let (status, json) = get_json(&mut app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_this_player() {
    let mut app = create_test_app(Some(Arc::new(StaticRankingService::new(3))));

    let (status, json) = get_json(&mut app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["player"], "the donkey killers");
    assert_eq!(json["ranking_configured"], true);
    assert_eq!(json["feedback_enabled"], false);
    assert_eq!(json["uptime_seconds"], 0);
}
