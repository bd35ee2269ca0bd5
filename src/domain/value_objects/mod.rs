mod adaptive_factors;
mod bet_decision;
mod game_key;
mod game_state;
mod policy_table;

pub use adaptive_factors::*;
pub use bet_decision::*;
pub use game_key::*;
pub use game_state::*;
pub use policy_table::*;
