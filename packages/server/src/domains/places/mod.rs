//! Places domain - the bookable locations visitors are received at.

pub mod models;

pub use models::Place;
