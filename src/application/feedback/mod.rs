mod refresh_factors;

pub use refresh_factors::*;
