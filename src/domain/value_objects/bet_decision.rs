use serde::Serialize;

/// Betting action chosen by the policy.
///
/// The host only receives [`BetDecision::amount`]: fold and check both
/// surface as 0 there. The variants keep the intent visible to logs and the
/// JSON API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "amount", rename_all = "snake_case")]
pub enum BetDecision {
    Fold,
    Check,
    Call(u32),
    /// Opening bet while nobody has chips in
    Bet(u32),
    Raise(u32),
}

impl BetDecision {
    /// Amount reported to the host
    pub fn amount(&self) -> u32 {
        match self {
            BetDecision::Fold | BetDecision::Check => 0,
            BetDecision::Call(amount) | BetDecision::Bet(amount) | BetDecision::Raise(amount) => {
                *amount
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BetDecision::Fold => "fold",
            BetDecision::Check => "check",
            BetDecision::Call(_) => "call",
            BetDecision::Bet(_) => "bet",
            BetDecision::Raise(_) => "raise",
        }
    }

    /// Check when there is nothing to call, otherwise call
    pub fn stay_in(current_buy_in: u32) -> Self {
        if current_buy_in == 0 {
            BetDecision::Check
        } else {
            BetDecision::Call(current_buy_in)
        }
    }

    /// Raise by `amount` on top of the current buy-in, never below the
    /// table's minimum raise
    pub fn raise(current_buy_in: u32, amount: u32, minimum_raise: u32) -> Self {
        BetDecision::Raise(current_buy_in.saturating_add(amount.max(minimum_raise)))
    }

    /// Give up the hand. Free to stay when nothing is owed, so that checks.
    pub fn fold(current_buy_in: u32) -> Self {
        if current_buy_in == 0 {
            BetDecision::Check
        } else {
            BetDecision::Fold
        }
    }
}

/// Decision with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub bet: BetDecision,
    pub reason: &'static str,
}

impl Decision {
    pub fn new(bet: BetDecision, reason: &'static str) -> Self {
        Self { bet, reason }
    }

    pub fn amount(&self) -> u32 {
        self.bet.amount()
    }
}
