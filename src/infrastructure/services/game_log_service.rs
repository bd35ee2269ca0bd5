//! Game Log Service
//!
//! HTTP and in-memory implementations of [`GameLogRepository`].

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::GameLog;
use crate::domain::repositories::{GameLogRepository, RepositoryError};

#[derive(Debug, Clone)]
pub struct GameLogConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Reads game logs from the live log service
pub struct HttpGameLogRepository {
    client: Client,
    config: GameLogConfig,
}

impl HttpGameLogRepository {
    pub fn new(config: GameLogConfig) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn log_url(&self, tournament_id: &str, game_id: &str) -> String {
        format!(
            "{}/tournament/{}/game/{}/log",
            self.config.base_url.trim_end_matches('/'),
            tournament_id,
            game_id
        )
    }
}

#[async_trait]
impl GameLogRepository for HttpGameLogRepository {
    async fn fetch_log(
        &self,
        tournament_id: &str,
        game_id: &str,
    ) -> Result<GameLog, RepositoryError> {
        let url = self.log_url(tournament_id, game_id);
        debug!("Fetching game log: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound(url));
        }
        if !status.is_success() {
            return Err(RepositoryError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| RepositoryError::Malformed(e.to_string()))
    }
}

/// In-memory game logs (for testing)
#[derive(Default)]
pub struct InMemoryGameLogRepository {
    logs: RwLock<HashMap<(String, String), GameLog>>,
}

impl InMemoryGameLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, tournament_id: &str, game_id: &str, log: GameLog) {
        self.logs
            .write()
            .await
            .insert((tournament_id.to_string(), game_id.to_string()), log);
    }
}

#[async_trait]
impl GameLogRepository for InMemoryGameLogRepository {
    async fn fetch_log(
        &self,
        tournament_id: &str,
        game_id: &str,
    ) -> Result<GameLog, RepositoryError> {
        self.logs
            .read()
            .await
            .get(&(tournament_id.to_string(), game_id.to_string()))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("{}/{}", tournament_id, game_id)))
    }
}
