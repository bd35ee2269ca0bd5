//! Runtime configuration read from the environment

use std::path::PathBuf;

pub const DEFAULT_PLAYER_NAME: &str = "the donkey killers";
pub const VERSION: &str = concat!("Donkey Killers ", env!("CARGO_PKG_VERSION"));

/// Player service configuration
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub port: u16,
    pub player_name: String,
    /// None disables the ranking service
    pub ranking_url: Option<String>,
    pub ranking_timeout_secs: u64,
    pub game_log_url: String,
    pub game_log_timeout_secs: u64,
    pub feedback_enabled: bool,
    pub policy_table_path: Option<PathBuf>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            port: env_parse("PORT", 9999),
            player_name: std::env::var("PLAYER_NAME")
                .unwrap_or_else(|_| DEFAULT_PLAYER_NAME.to_string()),
            ranking_url: match std::env::var("RANKING_SERVICE_URL") {
                Ok(url) if url.trim().is_empty() => None,
                Ok(url) => Some(url),
                Err(_) => Some("http://rainman.leanpoker.org/rank".to_string()),
            },
            ranking_timeout_secs: env_parse("RANKING_TIMEOUT_SECS", 3),
            game_log_url: std::env::var("GAME_LOG_SERVICE_URL")
                .unwrap_or_else(|_| "https://live.leanpoker.org/api".to_string()),
            game_log_timeout_secs: env_parse("GAME_LOG_TIMEOUT_SECS", 5),
            feedback_enabled: env_parse("FEEDBACK_ENABLED", true),
            policy_table_path: std::env::var("POLICY_TABLE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
