//! Feedback domain - visitor and employee feedback entries.

pub mod actions;
pub mod models;

pub use models::{Feedback, NewFeedback};
