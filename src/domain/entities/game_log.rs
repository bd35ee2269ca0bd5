use serde::{Deserialize, Serialize};

use super::{names_match, Card, PlayerStatus};

/// Transcript of a finished (or running) game from the log service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameLog {
    #[serde(default)]
    pub rounds: Vec<RoundSnapshot>,
    #[serde(default)]
    pub result: Option<GameResult>,
}

/// Per-round snapshot of every seat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    #[serde(default)]
    pub players: Vec<LoggedPlayer>,
    #[serde(default)]
    pub community_cards: Vec<Card>,
    #[serde(default)]
    pub current_buy_in: u32,
}

/// Player entry inside a logged round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedPlayer {
    pub name: String,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub bet: u32,
    #[serde(default)]
    pub hole_cards: Option<Vec<Card>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: String,
}

impl GameLog {
    /// Whether the named player won this game (None when no result yet)
    pub fn won_by(&self, name: &str) -> Option<bool> {
        self.result
            .as_ref()
            .map(|r| names_match(&r.winner, name))
    }

    /// Snapshots paired with the named player's entry in each of them
    pub fn entries_for<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a RoundSnapshot, &'a LoggedPlayer)> + 'a {
        self.rounds.iter().filter_map(move |round| {
            round
                .players
                .iter()
                .find(|p| names_match(&p.name, name))
                .map(|p| (round, p))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(json: &str) -> GameLog {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_winner_name_ignores_case_only() {
        let game = log(r#"{"rounds": [], "result": {"winner": "The Donkey Killers"}}"#);
        assert_eq!(game.won_by("the donkey killers"), Some(true));
        assert_eq!(game.won_by(" the donkey killers"), Some(false));
        assert_eq!(game.won_by("Albert"), Some(false));

        let running = log(r#"{"rounds": []}"#);
        assert_eq!(running.won_by("the donkey killers"), None);
    }

    #[test]
    fn test_entries_match_exact_name() {
        let game = log(
            r#"{"rounds": [
                {"players": [{"name": "THE DONKEY KILLERS", "bet": 10}]},
                {"players": [{"name": "the donkey killers ", "bet": 20}]}
            ]}"#,
        );
        let bets: Vec<u32> = game
            .entries_for("the donkey killers")
            .map(|(_, p)| p.bet)
            .collect();
        assert_eq!(bets, vec![10]);
    }
}
