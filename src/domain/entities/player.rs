use serde::{Deserialize, Serialize};

use super::Card;

/// Player status as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Active,
    Folded,
    Out,
    #[serde(other)]
    Other,
}

/// Exact, case-insensitive name comparison used for seat identity
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Player entity - one seat in the host's game state snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub stack: u32,
    #[serde(default)]
    pub bet: u32,
    /// Only present for our own seat in most payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole_cards: Option<Vec<Card>>,
}

impl Player {
    /// Case-insensitive identity check
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// The two private cards, if the host sent exactly two
    pub fn hole_pair(&self) -> Option<(Card, Card)> {
        match self.hole_cards.as_deref() {
            Some([first, second]) => Some((*first, *second)),
            _ => None,
        }
    }
}
