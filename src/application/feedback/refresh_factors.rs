//! RefreshFactors Use Case
//!
//! Fetches the logs of recent games and nudges the adaptive factors

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::repositories::GameLogRepository;
use crate::domain::services::analyze_logs;
use crate::domain::value_objects::{AdaptiveFactors, FeedbackStats, GameKey};

/// RefreshFactors input
#[derive(Debug, Clone)]
pub struct RefreshFactorsInput {
    pub games: Vec<GameKey>,
    pub current: AdaptiveFactors,
}

/// RefreshFactors output
#[derive(Debug, Clone)]
pub struct RefreshFactorsOutput {
    pub factors: AdaptiveFactors,
    pub stats: FeedbackStats,
    pub fetched: usize,
    pub failed: usize,
}

/// RefreshFactors error
#[derive(Debug, thiserror::Error)]
pub enum RefreshFactorsError {
    #[error("No usable game log among {requested} games")]
    NoUsableLogs { requested: usize },
}

/// RefreshFactors use case
pub struct RefreshFactors {
    game_logs: Arc<dyn GameLogRepository>,
    player_name: String,
}

impl RefreshFactors {
    pub fn new(game_logs: Arc<dyn GameLogRepository>, player_name: impl Into<String>) -> Self {
        Self {
            game_logs,
            player_name: player_name.into(),
        }
    }

    pub async fn execute(
        &self,
        input: RefreshFactorsInput,
    ) -> Result<RefreshFactorsOutput, RefreshFactorsError> {
        let requested = input.games.len();

        let fetches = input
            .games
            .iter()
            .map(|key| self.game_logs.fetch_log(&key.tournament_id, &key.game_id));
        let results = join_all(fetches).await;

        let mut logs = Vec::with_capacity(requested);
        for (key, result) in input.games.iter().zip(results) {
            match result {
                Ok(log) => logs.push(log),
                Err(e) => warn!("Failed to fetch game log {}: {}", key, e),
            }
        }

        let fetched = logs.len();
        let stats = analyze_logs(&logs, &self.player_name);
        if stats.games == 0 {
            return Err(RefreshFactorsError::NoUsableLogs { requested });
        }

        let factors = input.current.adjusted(&stats);
        debug!(
            "Factors refreshed from {} games: {:?} -> {:?}",
            stats.games, input.current, factors
        );

        Ok(RefreshFactorsOutput {
            factors,
            stats,
            fetched,
            failed: requested - fetched,
        })
    }
}
