//! Reusable UI components

mod loading;
mod nav;

pub use loading::*;
pub use nav::*;
