//! Store review facade.

pub mod feedback;

pub use feedback::Feedback;
