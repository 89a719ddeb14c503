// Frontdesk - API Core
//
// This crate provides the backend API for the visitor/booking management
// platform. It owns no database: every read and write goes through the
// hosted backend (Supabase) behind a single gateway, and outbound mail goes
// through Resend. Handlers validate, delegate, and wrap results in the
// normalized response envelope.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
