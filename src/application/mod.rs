pub mod betting;
pub mod feedback;
