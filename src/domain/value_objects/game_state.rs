//! GameState - Snapshot of the table sent by the host on every decision
//!
//! A fresh snapshot arrives with each request; nothing in here is mutated.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::domain::entities::{Card, Player};

/// Maximum number of cards the bot can know (2 hole + 5 community)
pub const MAX_KNOWN_CARDS: usize = 7;

/// Betting phase derived from the community cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Phase {
    /// Classify by community-card count. Any count other than 0/3/4/5 maps to
    /// pre-flop; use [`Phase::is_valid_community_count`] to detect that case.
    pub fn from_community_count(count: usize) -> Self {
        match count {
            3 => Phase::Flop,
            4 => Phase::Turn,
            5 => Phase::River,
            _ => Phase::PreFlop,
        }
    }

    pub fn is_valid_community_count(count: usize) -> bool {
        matches!(count, 0 | 3 | 4 | 5)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::PreFlop => "pre_flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game state snapshot as received from the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tournament_id: String,
    pub game_id: String,
    #[serde(default)]
    pub round: u32,
    #[serde(default)]
    pub bet_index: u32,
    pub small_blind: u32,
    #[serde(default)]
    pub current_buy_in: u32,
    #[serde(default)]
    pub pot: u32,
    #[serde(default)]
    pub minimum_raise: u32,
    #[serde(default)]
    pub dealer: u32,
    #[serde(default)]
    pub orbits: u32,
    #[serde(default)]
    pub in_action: u32,
    pub players: Vec<Player>,
    #[serde(default)]
    pub community_cards: Vec<Card>,
}

impl GameState {
    pub fn phase(&self) -> Phase {
        Phase::from_community_count(self.community_cards.len())
    }

    pub fn has_valid_community_count(&self) -> bool {
        Phase::is_valid_community_count(self.community_cards.len())
    }

    /// Find a seat by name (case-insensitive), first match wins
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.is_named(name))
    }

    /// True when no seat has committed chips this round
    pub fn all_bets_zero(&self) -> bool {
        self.players.iter().all(|p| p.bet == 0)
    }

    /// The player's hole cards followed by the community cards
    pub fn known_cards(&self, player: &Player) -> SmallVec<[Card; MAX_KNOWN_CARDS]> {
        let mut cards = SmallVec::new();
        if let Some(hole) = player.hole_cards.as_ref() {
            cards.extend(hole.iter().copied());
        }
        cards.extend(self.community_cards.iter().copied());
        cards
    }
}
