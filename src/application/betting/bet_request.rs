//! BetRequest Use Case
//!
//! Decides how many chips to put in for the current game state

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::services::{DecisionContext, DecisionPolicy};
use crate::domain::value_objects::{AdaptiveFactors, Decision, GameKey, GameState, Phase};
use crate::infrastructure::bot::FeedbackLoop;
use crate::infrastructure::services::HandOracle;

/// BetRequest input
pub struct BetRequestInput {
    pub game_state: GameState,
}

/// BetRequest output
#[derive(Debug, Clone)]
pub struct BetRequestOutput {
    pub decision: Decision,
    pub phase: Phase,
    pub factors: AdaptiveFactors,
    /// Whether a ranking was requested and came back
    pub ranked: bool,
}

impl BetRequestOutput {
    /// Chips reported to the host
    pub fn amount(&self) -> u32 {
        self.decision.amount()
    }
}

/// BetRequest error
#[derive(Debug, thiserror::Error)]
pub enum BetRequestError {
    #[error("Player '{0}' not found in game state")]
    OwnPlayerNotFound(String),
}

/// BetRequest use case
pub struct BetRequest {
    policy: Arc<DecisionPolicy>,
    oracle: HandOracle,
    feedback: FeedbackLoop,
    player_name: String,
}

impl BetRequest {
    pub fn new(
        policy: Arc<DecisionPolicy>,
        oracle: HandOracle,
        feedback: FeedbackLoop,
        player_name: impl Into<String>,
    ) -> Self {
        Self {
            policy,
            oracle,
            feedback,
            player_name: player_name.into(),
        }
    }

    pub async fn execute(
        &self,
        input: BetRequestInput,
    ) -> Result<BetRequestOutput, BetRequestError> {
        let state = &input.game_state;

        let me = state
            .find_player(&self.player_name)
            .ok_or_else(|| BetRequestError::OwnPlayerNotFound(self.player_name.clone()))?;

        if !state.has_valid_community_count() {
            warn!(
                "Game {}: unexpected community card count {}, playing as pre-flop",
                state.game_id,
                state.community_cards.len()
            );
        }

        self.feedback.observe(GameKey::from(state));
        let factors = self.feedback.factors().await;

        let ranking = if self.policy.needs_ranking(state, me) {
            self.oracle.rank(&state.known_cards(me)).await
        } else {
            None
        };

        let decision = {
            let mut rng = rand::thread_rng();
            let ctx = DecisionContext::new(state, me, factors);
            self.policy.decide(&ctx, ranking.as_ref(), &mut rng)
        };

        let phase = state.phase();
        info!(
            "Game {} round {} {}: {} {} ({})",
            state.game_id,
            state.round,
            phase,
            decision.bet.as_str(),
            decision.amount(),
            decision.reason
        );
        debug!(
            "Cards [{}], factors {:?}, ranking {:?}",
            state
                .known_cards(me)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            factors,
            ranking.as_ref().map(|r| r.rank)
        );

        Ok(BetRequestOutput {
            decision,
            phase,
            factors,
            ranked: ranking.is_some(),
        })
    }
}
