//! Showdown Use Case
//!
//! Called by the host when a game ends. The game is handed to the feedback
//! loop; the bet decision itself keeps no state.

use tracing::debug;

use crate::domain::value_objects::{GameKey, GameState};
use crate::infrastructure::bot::FeedbackLoop;

/// Showdown input
pub struct ShowdownInput {
    pub game_state: GameState,
}

/// Showdown output
#[derive(Debug)]
pub struct ShowdownOutput {
    pub game: GameKey,
    pub tracked: bool,
}

/// Showdown use case
pub struct Showdown {
    feedback: FeedbackLoop,
}

impl Showdown {
    pub fn new(feedback: FeedbackLoop) -> Self {
        Self { feedback }
    }

    pub fn execute(&self, input: ShowdownInput) -> ShowdownOutput {
        let game = GameKey::from(&input.game_state);
        debug!("Showdown for game {}", game);

        self.feedback.observe(game.clone());

        ShowdownOutput {
            game,
            tracked: self.feedback.is_enabled(),
        }
    }
}
