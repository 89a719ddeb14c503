//! Typed client for the Frontdesk API

pub mod client;

pub use client::{ApiClient, ClientError};
