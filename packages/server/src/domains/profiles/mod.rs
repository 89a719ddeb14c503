//! Profiles domain - the directory of accounts behind the dashboards.
//!
//! Responsibilities:
//! - Profile lookup and listing for the admin console
//! - Activate/deactivate (flag toggle, idempotent)
//! - Detail updates (display name, role)
//! - Password reset through the hosted auth provider + email

pub mod actions;
pub mod models;

pub use models::{DeactivateRequest, Profile, ProfilePatch};
