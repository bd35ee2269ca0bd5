//! Hand predicates - Hole-card categories and straight patterns
//!
//! Pure functions over the bot's cards. These are heuristics layered on top of
//! the ranking service, not a hand evaluator.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::{Card, Rank};

/// Ace counted low for the wheel
const ACE_LOW: u8 = 1;
const ACE_HIGH: u8 = 14;

/// Coarse category of two hole cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleCategory {
    Weak,
    Playable,
    Strong,
    Premium,
}

/// Pocket A/K/Q, or A-K in any suits
pub fn is_premium_hand(first: &Card, second: &Card) -> bool {
    if first.rank == second.rank {
        return matches!(first.rank, Rank::Ace | Rank::King | Rank::Queen);
    }
    is_rank_pair(first, second, Rank::Ace, Rank::King)
}

/// Pocket J/10, or A-Q, A-J, K-Q in any suits
pub fn is_strong_hand(first: &Card, second: &Card) -> bool {
    if first.rank == second.rank {
        return matches!(first.rank, Rank::Jack | Rank::Ten);
    }
    is_rank_pair(first, second, Rank::Ace, Rank::Queen)
        || is_rank_pair(first, second, Rank::Ace, Rank::Jack)
        || is_rank_pair(first, second, Rank::King, Rank::Queen)
}

/// Middle pocket pairs, suited small aces, suited connectors and one-gappers
pub fn is_playable_hand(first: &Card, second: &Card) -> bool {
    let (low, high) = ordered_values(first, second);

    if low == high {
        return (6..=9).contains(&low);
    }

    if first.suit != second.suit {
        return false;
    }

    if high == ACE_HIGH && (2..=9).contains(&low) {
        return true;
    }

    let gap = high - low;
    (gap == 1 || gap == 2) && low >= 7
}

pub fn classify_hole_cards(first: &Card, second: &Card) -> HoleCategory {
    if is_premium_hand(first, second) {
        HoleCategory::Premium
    } else if is_strong_hand(first, second) {
        HoleCategory::Strong
    } else if is_playable_hand(first, second) {
        HoleCategory::Playable
    } else {
        HoleCategory::Weak
    }
}

/// Four consecutive ranks that can be completed on either end, or the
/// A-2-3-4 wheel draw. Extra cards around the four do not matter.
pub fn has_open_ended_straight_draw(cards: &[Card]) -> bool {
    let values = distinct_values(cards);

    // Windows starting above the low ace and ending below the high ace
    let open_run = (ACE_LOW + 1..=ACE_HIGH - 4)
        .any(|low| (low..low + 4).all(|v| values.contains(&v)));

    open_run || is_wheel_draw(&values)
}

/// Five or more consecutive ranks, or the A-2-3-4-5 wheel
pub fn has_straight(cards: &[Card]) -> bool {
    let values = distinct_values(cards);

    let long_run = consecutive_runs(&values)
        .into_iter()
        .any(|(low, high)| high - low + 1 >= 5);

    long_run || (is_wheel_draw_base(&values) && values.contains(&5))
}

fn is_rank_pair(first: &Card, second: &Card, a: Rank, b: Rank) -> bool {
    (first.rank == a && second.rank == b) || (first.rank == b && second.rank == a)
}

fn ordered_values(first: &Card, second: &Card) -> (u8, u8) {
    let (a, b) = (first.value(), second.value());
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn distinct_values(cards: &[Card]) -> BTreeSet<u8> {
    cards.iter().map(Card::value).collect()
}

/// Maximal runs of consecutive values as (low, high), inclusive
fn consecutive_runs(values: &BTreeSet<u8>) -> Vec<(u8, u8)> {
    let mut runs = Vec::new();
    let mut iter = values.iter().copied();

    let Some(first) = iter.next() else {
        return runs;
    };

    let (mut low, mut high) = (first, first);
    for value in iter {
        if value == high + 1 {
            high = value;
        } else {
            runs.push((low, high));
            low = value;
            high = value;
        }
    }
    runs.push((low, high));

    runs
}

fn is_wheel_draw_base(values: &BTreeSet<u8>) -> bool {
    [ACE_HIGH, 2, 3, 4].iter().all(|v| values.contains(v))
}

fn is_wheel_draw(values: &BTreeSet<u8>) -> bool {
    is_wheel_draw_base(values) && !values.contains(&5)
}
