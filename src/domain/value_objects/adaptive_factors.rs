use serde::{Deserialize, Serialize};

/// Lower bound for both factors
pub const FACTOR_MIN: f64 = 0.5;
/// Upper bound for both factors
pub const FACTOR_MAX: f64 = 2.0;

/// Statistics derived from the recent game logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackStats {
    /// Logs that could be analyzed
    pub games: usize,
    pub win_rate: f64,
    pub fold_rate: f64,
    pub aggressive_rate: f64,
    pub bluff_rate: f64,
    pub mean_bet: f64,
}

/// Scalar multipliers applied by the decision policy.
///
/// `aggressiveness` scales raise sizes, `looseness` scales the adjusted hand
/// rank and the amounts we are willing to call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveFactors {
    pub aggressiveness: f64,
    pub looseness: f64,
}

impl Default for AdaptiveFactors {
    fn default() -> Self {
        Self::neutral()
    }
}

impl AdaptiveFactors {
    pub fn neutral() -> Self {
        Self {
            aggressiveness: 1.0,
            looseness: 1.0,
        }
    }

    /// Build from raw values, clamping both into bounds
    pub fn new(aggressiveness: f64, looseness: f64) -> Self {
        Self {
            aggressiveness: clamp_factor(aggressiveness),
            looseness: clamp_factor(looseness),
        }
    }

    /// Factors nudged by recent results. Without analyzed games nothing moves.
    pub fn adjusted(&self, stats: &FeedbackStats) -> Self {
        if stats.games == 0 {
            return *self;
        }

        let aggressiveness_step = if stats.win_rate > 0.6 {
            1.10
        } else if stats.win_rate > 0.4 {
            1.0
        } else if stats.win_rate > 0.2 {
            0.95
        } else {
            0.90
        };

        // Folding a lot means we play too tight
        let looseness_step = if stats.fold_rate > 0.7 {
            1.10
        } else if stats.fold_rate > 0.5 {
            1.05
        } else if stats.fold_rate > 0.3 {
            1.0
        } else {
            0.95
        };

        Self::new(
            self.aggressiveness * aggressiveness_step,
            self.looseness * looseness_step,
        )
    }
}

fn clamp_factor(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(FACTOR_MIN, FACTOR_MAX)
}
