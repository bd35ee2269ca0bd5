mod game_log_service;
mod ranking_service;

pub use game_log_service::*;
pub use ranking_service::*;
