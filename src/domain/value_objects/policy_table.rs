//! PolicyTable - Threshold table driving the decision policy
//!
//! Every amount in here is expressed in small blinds. Raise sizes are scaled
//! by aggressiveness, call limits by looseness. The default table is the one
//! the bot plays with; a JSON file with the same shape can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Phase;

#[derive(Debug, thiserror::Error)]
pub enum PolicyTableError {
    #[error("Failed to read policy table: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid policy table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid policy table: {0}")]
    Invalid(&'static str),
}

/// Pre-flop sizing by hole-card category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreFlopRules {
    pub premium_raise: f64,
    pub strong_raise: f64,
    /// Playable hands limp in up to this buy-in
    pub limp_limit: f64,
    /// Playable hands call a raise up to this buy-in
    pub call_limit: f64,
}

/// What a matching rank tier does
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierAction {
    Raise {
        blinds: f64,
    },
    /// Raise while the buy-in is under the limit, otherwise just call
    RaiseIfCheap {
        blinds: f64,
        call_limit: f64,
    },
    /// Stay in while the buy-in is under the limit
    StayInIfCheap {
        call_limit: f64,
    },
}

/// Applies when the adjusted hand rank reaches `min_rank`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTier {
    pub min_rank: f64,
    pub action: TierAction,
}

/// Rules for one post-flop street
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetRules {
    /// Value raise for a straight detected from our own cards
    #[serde(default)]
    pub made_straight_raise: Option<f64>,
    /// Ordered from strongest to weakest
    pub tiers: Vec<RankTier>,
    /// Chase an open-ended straight draw up to this buy-in
    #[serde(default)]
    pub draw_call_limit: Option<f64>,
}

/// Behaviour when the ranking service gives no answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackRules {
    /// Chance of a modest bet when nobody has bet yet
    pub bet_probability: f64,
    pub bet_blinds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyTable {
    pub pre_flop: PreFlopRules,
    pub flop: StreetRules,
    pub turn: StreetRules,
    pub river: StreetRules,
    pub fallback: FallbackRules,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            pre_flop: PreFlopRules {
                premium_raise: 3.0,
                strong_raise: 2.0,
                limp_limit: 2.0,
                call_limit: 4.0,
            },
            flop: StreetRules {
                made_straight_raise: None,
                tiers: vec![
                    RankTier {
                        min_rank: 6.0,
                        action: TierAction::Raise { blinds: 2.0 },
                    },
                    RankTier {
                        min_rank: 4.0,
                        action: TierAction::StayInIfCheap { call_limit: 3.0 },
                    },
                    RankTier {
                        min_rank: 2.0,
                        action: TierAction::StayInIfCheap { call_limit: 2.0 },
                    },
                ],
                draw_call_limit: Some(3.0),
            },
            turn: StreetRules {
                made_straight_raise: None,
                tiers: vec![
                    RankTier {
                        min_rank: 7.0,
                        action: TierAction::Raise { blinds: 3.0 },
                    },
                    RankTier {
                        min_rank: 5.0,
                        action: TierAction::RaiseIfCheap {
                            blinds: 2.0,
                            call_limit: 4.0,
                        },
                    },
                    RankTier {
                        min_rank: 3.0,
                        action: TierAction::StayInIfCheap { call_limit: 2.0 },
                    },
                ],
                draw_call_limit: Some(2.0),
            },
            river: StreetRules {
                made_straight_raise: Some(4.0),
                tiers: vec![
                    RankTier {
                        min_rank: 8.0,
                        action: TierAction::Raise { blinds: 4.0 },
                    },
                    RankTier {
                        min_rank: 6.0,
                        action: TierAction::Raise { blinds: 2.0 },
                    },
                    RankTier {
                        min_rank: 4.0,
                        action: TierAction::StayInIfCheap { call_limit: 3.0 },
                    },
                    RankTier {
                        min_rank: 2.0,
                        action: TierAction::StayInIfCheap { call_limit: 1.0 },
                    },
                ],
                draw_call_limit: None,
            },
            fallback: FallbackRules {
                bet_probability: 0.1,
                bet_blinds: 1.0,
            },
        }
    }
}

impl PolicyTable {
    /// Load a table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PolicyTableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, PolicyTableError> {
        let table: PolicyTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), PolicyTableError> {
        if !(0.0..=1.0).contains(&self.fallback.bet_probability) {
            return Err(PolicyTableError::Invalid(
                "fallback bet probability must be between 0 and 1",
            ));
        }

        for street in [&self.flop, &self.turn, &self.river] {
            let ordered = street
                .tiers
                .windows(2)
                .all(|pair| pair[0].min_rank >= pair[1].min_rank);
            if !ordered {
                return Err(PolicyTableError::Invalid(
                    "rank tiers must be ordered from strongest to weakest",
                ));
            }
        }

        Ok(())
    }

    /// Street rules for a post-flop phase
    pub fn street(&self, phase: Phase) -> Option<&StreetRules> {
        match phase {
            Phase::PreFlop => None,
            Phase::Flop => Some(&self.flop),
            Phase::Turn => Some(&self.turn),
            Phase::River => Some(&self.river),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert!(PolicyTable::default().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_of_default() {
        let json = serde_json::to_string_pretty(&PolicyTable::default()).unwrap();
        let table = PolicyTable::from_json(&json).unwrap();
        assert_eq!(table, PolicyTable::default());
    }

    #[test]
    fn test_unordered_tiers_are_rejected() {
        let mut table = PolicyTable::default();
        table.flop.tiers.reverse();
        assert!(matches!(
            table.validate(),
            Err(PolicyTableError::Invalid(_))
        ));
    }

    #[test]
    fn test_bad_probability_is_rejected() {
        let mut table = PolicyTable::default();
        table.fallback.bet_probability = 1.5;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PolicyTable::from_path("/nonexistent/policy.json");
        assert!(matches!(result, Err(PolicyTableError::Io(_))));
    }

    #[test]
    fn test_street_lookup() {
        let table = PolicyTable::default();
        assert!(table.street(Phase::PreFlop).is_none());
        assert_eq!(table.street(Phase::River).unwrap().made_straight_raise, Some(4.0));
    }
}
