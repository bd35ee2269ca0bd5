use std::sync::Arc;
use std::time::Instant;

use crate::application::feedback::RefreshFactors;
use crate::domain::repositories::GameLogRepository;
use crate::domain::services::DecisionPolicy;
use crate::domain::value_objects::PolicyTable;
use crate::infrastructure::bot::FeedbackLoop;
use crate::infrastructure::config::PlayerConfig;
use crate::infrastructure::services::{
    GameLogConfig, HandOracle, HttpGameLogRepository, HttpRankingService, RankingConfig,
    RankingService,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: PlayerConfig,

    /// Betting policy built from the threshold table
    pub policy: Arc<DecisionPolicy>,

    /// Ranking lookup, unavailable when no service is configured
    pub oracle: HandOracle,

    /// Adaptive factors and the task refreshing them
    pub feedback: FeedbackLoop,

    /// When the state was built, reported as uptime
    pub started_at: Instant,
}

impl AppState {
    /// Build the state with the HTTP services described by `config`.
    /// Spawns the feedback loop, so this must run inside a tokio runtime.
    pub fn new(config: PlayerConfig) -> anyhow::Result<Self> {
        let table = match config.policy_table_path.as_ref() {
            Some(path) => {
                tracing::info!("Loading policy table from {}", path.display());
                PolicyTable::from_path(path)?
            }
            None => PolicyTable::default(),
        };

        let ranking: Option<Arc<dyn RankingService>> = match config.ranking_url.as_ref() {
            Some(url) => {
                let service = HttpRankingService::new(RankingConfig {
                    url: url.clone(),
                    timeout_secs: config.ranking_timeout_secs,
                })?;
                tracing::info!("Ranking service: {}", url);
                Some(Arc::new(service))
            }
            None => {
                tracing::info!("Ranking service not configured - using local fallback");
                None
            }
        };

        let game_logs: Option<Arc<dyn GameLogRepository>> = if config.feedback_enabled {
            let repo = HttpGameLogRepository::new(GameLogConfig {
                base_url: config.game_log_url.clone(),
                timeout_secs: config.game_log_timeout_secs,
            })?;
            Some(Arc::new(repo))
        } else {
            tracing::info!("Feedback loop disabled - factors stay neutral");
            None
        };

        Ok(Self::with_services(config, table, ranking, game_logs))
    }

    /// Build the state around injected services (used by tests)
    pub fn with_services(
        config: PlayerConfig,
        table: PolicyTable,
        ranking: Option<Arc<dyn RankingService>>,
        game_logs: Option<Arc<dyn GameLogRepository>>,
    ) -> Self {
        let feedback = match game_logs {
            Some(repo) if config.feedback_enabled => {
                FeedbackLoop::spawn(RefreshFactors::new(repo, config.player_name.clone()))
            }
            _ => FeedbackLoop::disabled(),
        };

        Self {
            policy: Arc::new(DecisionPolicy::new(table)),
            oracle: HandOracle::new(ranking),
            feedback,
            config,
            started_at: Instant::now(),
        }
    }
}
