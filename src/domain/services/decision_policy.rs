//! Decision policy - Maps a game snapshot to a bet
//!
//! One policy for every phase, parameterized by a [`PolicyTable`]. The policy
//! is a pure function of the snapshot, the adaptive factors, the ranking (if
//! any) and the random source handed in by the caller.

use rand::Rng;

use super::hand_predicates::{
    classify_hole_cards, has_open_ended_straight_draw, has_straight, HoleCategory,
};
use crate::domain::entities::{Card, HandRanking, Player};
use crate::domain::value_objects::{
    AdaptiveFactors, BetDecision, Decision, GameState, Phase, PolicyTable, StreetRules,
    TierAction,
};

/// Everything the policy looks at for one decision
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub state: &'a GameState,
    pub player: &'a Player,
    pub factors: AdaptiveFactors,
}

impl<'a> DecisionContext<'a> {
    pub fn new(state: &'a GameState, player: &'a Player, factors: AdaptiveFactors) -> Self {
        Self {
            state,
            player,
            factors,
        }
    }

    /// Small blinds scaled by aggressiveness, rounded to chips
    fn raise_amount(&self, blinds: f64) -> u32 {
        chips(self.state.small_blind, blinds * self.factors.aggressiveness)
    }

    /// Whether the buy-in is within `blinds` small blinds scaled by looseness
    fn is_cheap(&self, blinds: f64) -> bool {
        let limit = self.state.small_blind as f64 * blinds * self.factors.looseness;
        self.state.current_buy_in as f64 <= limit
    }

    fn raise(&self, blinds: f64) -> BetDecision {
        BetDecision::raise(
            self.state.current_buy_in,
            self.raise_amount(blinds),
            self.state.minimum_raise,
        )
    }

    fn stay_in(&self) -> BetDecision {
        BetDecision::stay_in(self.state.current_buy_in)
    }

    fn fold(&self) -> BetDecision {
        BetDecision::fold(self.state.current_buy_in)
    }
}

pub struct DecisionPolicy {
    table: PolicyTable,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::new(PolicyTable::default())
    }
}

impl DecisionPolicy {
    pub fn new(table: PolicyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PolicyTable {
        &self.table
    }

    /// Whether [`decide`](Self::decide) would use a hand ranking here.
    ///
    /// Pre-flop only looks at the hole cards, and a straight made on the
    /// river is bet without asking.
    pub fn needs_ranking(&self, state: &GameState, player: &Player) -> bool {
        if player.hole_pair().is_none() {
            return false;
        }

        match state.phase() {
            Phase::PreFlop => false,
            phase => match self.table.street(phase) {
                Some(rules) => !Self::has_made_straight(rules, &state.known_cards(player)),
                None => false,
            },
        }
    }

    pub fn decide<R: Rng + ?Sized>(
        &self,
        ctx: &DecisionContext<'_>,
        ranking: Option<&HandRanking>,
        rng: &mut R,
    ) -> Decision {
        let Some((first, second)) = ctx.player.hole_pair() else {
            return Self::without_hole_cards(ctx);
        };

        match ctx.state.phase() {
            Phase::PreFlop => self.pre_flop(ctx, &first, &second),
            phase => match self.table.street(phase) {
                Some(rules) => self.post_flop(ctx, rules, ranking, rng),
                None => Decision::new(ctx.fold(), "no rules for phase"),
            },
        }
    }

    /// Without cards to judge, open for a small blind when the pot is
    /// untouched and stay out otherwise
    fn without_hole_cards(ctx: &DecisionContext<'_>) -> Decision {
        if ctx.state.all_bets_zero() {
            Decision::new(
                BetDecision::Bet(ctx.state.small_blind),
                "opening bet without hole cards",
            )
        } else {
            Decision::new(ctx.fold(), "no hole cards")
        }
    }

    fn pre_flop(&self, ctx: &DecisionContext<'_>, first: &Card, second: &Card) -> Decision {
        let rules = &self.table.pre_flop;

        match classify_hole_cards(first, second) {
            HoleCategory::Premium => Decision::new(ctx.raise(rules.premium_raise), "premium hand"),
            HoleCategory::Strong => Decision::new(ctx.raise(rules.strong_raise), "strong hand"),
            HoleCategory::Playable => {
                if ctx.is_cheap(rules.limp_limit) {
                    Decision::new(ctx.stay_in(), "limp with playable hand")
                } else if ctx.is_cheap(rules.call_limit) {
                    Decision::new(ctx.stay_in(), "call raise with playable hand")
                } else {
                    Decision::new(ctx.fold(), "playable hand priced out")
                }
            }
            HoleCategory::Weak => Decision::new(ctx.fold(), "weak hand"),
        }
    }

    fn post_flop<R: Rng + ?Sized>(
        &self,
        ctx: &DecisionContext<'_>,
        rules: &StreetRules,
        ranking: Option<&HandRanking>,
        rng: &mut R,
    ) -> Decision {
        let known = ctx.state.known_cards(ctx.player);

        if let Some(blinds) = rules.made_straight_raise {
            if has_straight(&known) {
                return Decision::new(ctx.raise(blinds), "made straight");
            }
        }

        match ranking {
            Some(ranking) => {
                if let Some(decision) = Self::rank_tiers(ctx, rules, ranking) {
                    return decision;
                }
            }
            None => {
                let fallback = &self.table.fallback;
                if ctx.state.current_buy_in == 0 && rng.gen::<f64>() < fallback.bet_probability {
                    return Decision::new(
                        ctx.raise(fallback.bet_blinds),
                        "probe bet without ranking",
                    );
                }
            }
        }

        if let Some(limit) = rules.draw_call_limit {
            if ctx.is_cheap(limit) && has_open_ended_straight_draw(&known) {
                return Decision::new(ctx.stay_in(), "open-ended straight draw");
            }
        }

        Decision::new(ctx.fold(), "nothing to continue with")
    }

    /// First tier reached by the adjusted rank that yields an action
    fn rank_tiers(
        ctx: &DecisionContext<'_>,
        rules: &StreetRules,
        ranking: &HandRanking,
    ) -> Option<Decision> {
        let adjusted = ranking.rank as f64 * ctx.factors.looseness;

        for tier in rules.tiers.iter().filter(|t| adjusted >= t.min_rank) {
            match tier.action {
                TierAction::Raise { blinds } => {
                    return Some(Decision::new(ctx.raise(blinds), "ranking worth a raise"));
                }
                TierAction::RaiseIfCheap { blinds, call_limit } => {
                    return Some(if ctx.is_cheap(call_limit) {
                        Decision::new(ctx.raise(blinds), "ranking worth a raise")
                    } else {
                        Decision::new(ctx.stay_in(), "ranking worth a call")
                    });
                }
                TierAction::StayInIfCheap { call_limit } => {
                    if ctx.is_cheap(call_limit) {
                        return Some(Decision::new(ctx.stay_in(), "ranking worth a call"));
                    }
                }
            }
        }

        None
    }

    fn has_made_straight(rules: &StreetRules, known: &[Card]) -> bool {
        rules.made_straight_raise.is_some() && has_straight(known)
    }
}

fn chips(small_blind: u32, multiplier: f64) -> u32 {
    (small_blind as f64 * multiplier).round().max(0.0) as u32
}
