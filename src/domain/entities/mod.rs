mod card;
mod game_log;
mod hand_ranking;
mod player;

pub use card::*;
pub use game_log::*;
pub use hand_ranking::*;
pub use player::*;
