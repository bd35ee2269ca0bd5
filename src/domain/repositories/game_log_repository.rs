use async_trait::async_trait;

use crate::domain::entities::GameLog;

/// Repository errors
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Malformed game log: {0}")]
    Malformed(String),
}

/// Source of finished game transcripts
#[async_trait]
pub trait GameLogRepository: Send + Sync {
    /// Fetch the log of one game
    async fn fetch_log(&self, tournament_id: &str, game_id: &str)
        -> Result<GameLog, RepositoryError>;
}
