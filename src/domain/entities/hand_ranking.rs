use serde::{Deserialize, Serialize};

use super::Card;

/// Result returned by the hand ranking service.
///
/// Only `rank` drives betting decisions; every field is required so a
/// partial response is treated as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRanking {
    /// Strength class, higher is stronger
    pub rank: u8,
    pub value: u32,
    pub second_value: u32,
    pub kickers: Vec<u32>,
    pub cards_used: Vec<Card>,
    pub cards: Vec<Card>,
}

impl HandRanking {
    /// Ranking with only a strength class (used by stubs)
    pub fn with_rank(rank: u8) -> Self {
        Self {
            rank,
            value: 0,
            second_value: 0,
            kickers: Vec::new(),
            cards_used: Vec::new(),
            cards: Vec::new(),
        }
    }
}
