mod bet_request;
mod showdown;

pub use bet_request::*;
pub use showdown::*;
