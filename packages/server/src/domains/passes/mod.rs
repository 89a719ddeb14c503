//! Passes domain - badges issued when a visitor checks in.

pub mod models;

pub use models::{NewPass, Pass};
