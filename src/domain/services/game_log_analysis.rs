//! Game log analysis - Turns finished game logs into feedback statistics

use crate::domain::entities::{names_match, GameLog, PlayerStatus, RoundSnapshot};
use crate::domain::value_objects::FeedbackStats;

use super::hand_predicates::{classify_hole_cards, HoleCategory};

/// Derive statistics for `name` from a batch of logs.
///
/// Logs in which the player never appears are ignored entirely.
pub fn analyze_logs(logs: &[GameLog], name: &str) -> FeedbackStats {
    let mut games = 0usize;
    let mut with_result = 0usize;
    let mut wins = 0usize;
    let mut folded = 0usize;
    let mut snapshots = 0usize;
    let mut aggressive = 0usize;
    let mut bluffs = 0usize;
    let mut bet_total = 0u64;
    let mut bet_count = 0usize;

    for log in logs {
        let entries: Vec<_> = log.entries_for(name).collect();
        let Some((_, last)) = entries.last() else {
            continue;
        };

        games += 1;
        if last.status == PlayerStatus::Folded {
            folded += 1;
        }
        if let Some(won) = log.won_by(name) {
            with_result += 1;
            if won {
                wins += 1;
            }
        }

        for (round, entry) in &entries {
            snapshots += 1;

            if entry.bet > 0 {
                bet_total += u64::from(entry.bet);
                bet_count += 1;
            }

            if leads_betting(round, name, entry.bet) {
                aggressive += 1;
                let weak = match entry.hole_cards.as_deref() {
                    Some([first, second]) => {
                        classify_hole_cards(first, second) == HoleCategory::Weak
                    }
                    _ => false,
                };
                if weak {
                    bluffs += 1;
                }
            }
        }
    }

    FeedbackStats {
        games,
        win_rate: ratio(wins, with_result),
        fold_rate: ratio(folded, games),
        aggressive_rate: ratio(aggressive, snapshots),
        bluff_rate: ratio(bluffs, aggressive),
        mean_bet: if bet_count == 0 {
            0.0
        } else {
            bet_total as f64 / bet_count as f64
        },
    }
}

/// Our bet is positive and strictly above everyone else's
fn leads_betting(round: &RoundSnapshot, name: &str, bet: u32) -> bool {
    bet > 0
        && round
            .players
            .iter()
            .filter(|p| !names_match(&p.name, name))
            .all(|p| p.bet < bet)
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
