use serde::Serialize;

use super::GameState;

/// Identifies one game inside a tournament
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameKey {
    pub tournament_id: String,
    pub game_id: String,
}

impl GameKey {
    pub fn new(tournament_id: impl Into<String>, game_id: impl Into<String>) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            game_id: game_id.into(),
        }
    }
}

impl From<&GameState> for GameKey {
    fn from(state: &GameState) -> Self {
        Self::new(state.tournament_id.clone(), state.game_id.clone())
    }
}

impl std::fmt::Display for GameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.tournament_id, self.game_id)
    }
}
