mod feedback_loop;

pub use feedback_loop::*;
