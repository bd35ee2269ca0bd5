//! Feedback Loop
//!
//! Background task that watches which games the bot plays and periodically
//! refreshes the adaptive factors from their logs. The betting path only
//! reads a snapshot of the factors and never waits on the loop.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};

use crate::application::feedback::{RefreshFactors, RefreshFactorsInput};
use crate::domain::value_objects::{AdaptiveFactors, FeedbackStats, GameKey};

/// Games kept for analysis
pub const FEEDBACK_WINDOW: usize = 10;
/// New games observed between two refreshes
pub const REFRESH_INTERVAL: usize = 5;

const CHANNEL_CAPACITY: usize = 64;

/// Rolling window of recently played games
#[derive(Debug, Default)]
pub struct FeedbackTracker {
    window: VecDeque<GameKey>,
    since_refresh: usize,
}

impl FeedbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a game. Returns true when a refresh is due.
    pub fn observe(&mut self, key: GameKey) -> bool {
        if self.window.contains(&key) {
            return false;
        }

        self.window.push_back(key);
        while self.window.len() > FEEDBACK_WINDOW {
            self.window.pop_front();
        }

        self.since_refresh += 1;
        if self.since_refresh >= REFRESH_INTERVAL {
            self.since_refresh = 0;
            true
        } else {
            false
        }
    }

    pub fn window(&self) -> Vec<GameKey> {
        self.window.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Current factors and what produced them
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FactorSnapshot {
    pub factors: AdaptiveFactors,
    pub stats: Option<FeedbackStats>,
    pub refreshes: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Handle to the shared factors and, when enabled, the background task
#[derive(Clone)]
pub struct FeedbackLoop {
    snapshot: Arc<RwLock<FactorSnapshot>>,
    sender: Option<mpsc::Sender<GameKey>>,
}

impl FeedbackLoop {
    /// Factors stay neutral and observed games are ignored
    pub fn disabled() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(FactorSnapshot::default())),
            sender: None,
        }
    }

    /// Start the background task. Must be called inside a tokio runtime.
    pub fn spawn(refresh: RefreshFactors) -> Self {
        let snapshot = Arc::new(RwLock::new(FactorSnapshot::default()));
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);

        tokio::spawn(run_feedback_loop(receiver, refresh, snapshot.clone()));
        info!(
            "Feedback loop started (window {}, refresh every {} games)",
            FEEDBACK_WINDOW, REFRESH_INTERVAL
        );

        Self {
            snapshot,
            sender: Some(sender),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    pub async fn factors(&self) -> AdaptiveFactors {
        self.snapshot.read().await.factors
    }

    pub async fn snapshot(&self) -> FactorSnapshot {
        *self.snapshot.read().await
    }

    /// Hand a game to the loop without waiting
    pub fn observe(&self, key: GameKey) {
        let Some(sender) = self.sender.as_ref() else {
            return;
        };

        match sender.try_send(key) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(key)) => {
                debug!("Feedback queue full, dropping {}", key);
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!("Feedback loop is no longer running");
            }
        }
    }
}

async fn run_feedback_loop(
    mut receiver: mpsc::Receiver<GameKey>,
    refresh: RefreshFactors,
    snapshot: Arc<RwLock<FactorSnapshot>>,
) {
    let mut tracker = FeedbackTracker::new();

    while let Some(key) = receiver.recv().await {
        if !tracker.observe(key) {
            continue;
        }

        let current = snapshot.read().await.factors;
        let input = RefreshFactorsInput {
            games: tracker.window(),
            current,
        };

        match refresh.execute(input).await {
            Ok(output) => {
                let mut guard = snapshot.write().await;
                guard.factors = output.factors;
                guard.stats = Some(output.stats);
                guard.refreshes += 1;
                guard.refreshed_at = Some(Utc::now());
                info!(
                    "Adaptive factors updated: aggressiveness {:.3}, looseness {:.3} ({} logs, {} failed)",
                    output.factors.aggressiveness,
                    output.factors.looseness,
                    output.fetched,
                    output.failed
                );
            }
            Err(e) => warn!("Factor refresh skipped: {}", e),
        }
    }

    debug!("Feedback loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GameLog;
    use crate::infrastructure::services::InMemoryGameLogRepository;
    use std::time::Duration;

    fn key(game: usize) -> GameKey {
        GameKey::new("t1", format!("g{}", game))
    }

    #[test]
    fn test_refresh_due_every_five_new_games() {
        let mut tracker = FeedbackTracker::new();
        let due: Vec<bool> = (0..10).map(|i| tracker.observe(key(i))).collect();
        assert_eq!(
            due,
            vec![false, false, false, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_repeated_game_is_not_new() {
        let mut tracker = FeedbackTracker::new();
        for _ in 0..10 {
            assert!(!tracker.observe(key(1)));
        }
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_window_keeps_latest_games() {
        let mut tracker = FeedbackTracker::new();
        for i in 0..15 {
            tracker.observe(key(i));
        }
        let window = tracker.window();
        assert_eq!(window.len(), FEEDBACK_WINDOW);
        assert_eq!(window[0], key(5));
        assert_eq!(window[FEEDBACK_WINDOW - 1], key(14));
    }

    #[tokio::test]
    async fn test_disabled_loop_stays_neutral() {
        let feedback = FeedbackLoop::disabled();
        feedback.observe(key(1));
        assert!(!feedback.is_enabled());
        assert_eq!(feedback.factors().await, AdaptiveFactors::neutral());
    }

    #[tokio::test]
    async fn test_loop_refreshes_after_five_games() {
        let log: GameLog = serde_json::from_str(
            r#"{
                "rounds": [{"players": [{"name": "the donkey killers", "status": "folded", "bet": 0}]}],
                "result": {"winner": "Albert"}
            }"#,
        )
        .unwrap();

        let repo = Arc::new(InMemoryGameLogRepository::new());
        for i in 0..REFRESH_INTERVAL {
            repo.insert("t1", &format!("g{}", i), log.clone()).await;
        }

        let feedback = FeedbackLoop::spawn(RefreshFactors::new(repo, "the donkey killers"));
        for i in 0..REFRESH_INTERVAL {
            feedback.observe(key(i));
        }

        let mut snapshot = feedback.snapshot().await;
        for _ in 0..100 {
            if snapshot.refreshes > 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
            snapshot = feedback.snapshot().await;
        }

        assert_eq!(snapshot.refreshes, 1);
        assert!(snapshot.refreshed_at.is_some());
        // Never winning and always folding: more passive, looser
        assert!((snapshot.factors.aggressiveness - 0.9).abs() < 1e-9);
        assert!((snapshot.factors.looseness - 1.1).abs() < 1e-9);
        assert_eq!(snapshot.stats.map(|s| s.games), Some(REFRESH_INTERVAL));
    }
}
