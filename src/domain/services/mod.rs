mod decision_policy;
mod game_log_analysis;
mod hand_predicates;

pub use decision_policy::*;
pub use game_log_analysis::*;
pub use hand_predicates::*;
