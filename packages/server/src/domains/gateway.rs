//! Trait seams for the external collaborators.
//!
//! The platform owns no storage and sends no mail itself; everything goes
//! through these three interfaces, each with exactly one production
//! implementation (see `kernel`). Handlers and actions depend on the traits
//! so tests can substitute in-memory fakes.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domains::bookings::{Booking, BookingReminder, NewBooking, NewReminder};
use crate::domains::feedback::{Feedback, NewFeedback};
use crate::domains::identity::Identity;
use crate::domains::passes::{NewPass, Pass};
use crate::domains::places::Place;
use crate::domains::profiles::{Profile, ProfilePatch};

/// A session established by the identity provider.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub access_token: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
    pub user_id: Uuid,
}

/// The hosted identity/session provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve an access token to the active identity behind it.
    ///
    /// Every failure mode collapses to `None`: missing or expired token,
    /// provider error, missing profile row, inactive profile. Resolution
    /// never mutates session state.
    async fn resolve_identity(&self, access_token: &str) -> Option<Identity>;

    /// Exchange credentials for a session. `Ok(None)` means the provider
    /// rejected the credentials; `Err` is an upstream failure.
    async fn password_sign_in(&self, email: &str, password: &str) -> Result<Option<SignedIn>>;

    /// Revoke a session. Revoking an already-dead token is not an error.
    async fn revoke(&self, access_token: &str) -> Result<()>;

    /// Produce a password-recovery link for the given email.
    async fn recovery_link(&self, email: &str) -> Result<String>;
}

/// The hosted data store, one client for the whole process.
#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>>;
    async fn list_profiles(&self) -> Result<Vec<Profile>>;
    async fn update_profile(&self, id: Uuid, patch: &ProfilePatch) -> Result<Option<Profile>>;
    /// Set the active flag. `reason` is stored on deactivation and cleared
    /// on activation. Setting an already-set flag is a no-op.
    async fn set_profile_active(
        &self,
        id: Uuid,
        active: bool,
        reason: Option<&str>,
    ) -> Result<Option<Profile>>;

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>>;
    async fn list_bookings(&self, on: Option<NaiveDate>) -> Result<Vec<Booking>>;
    async fn create_booking(&self, new: &NewBooking) -> Result<Booking>;
    async fn mark_checked_in(&self, id: Uuid) -> Result<Option<Booking>>;
    async fn append_reminder(&self, reminder: &NewReminder) -> Result<BookingReminder>;

    async fn issue_pass(&self, new: &NewPass) -> Result<Pass>;
    async fn list_passes(&self) -> Result<Vec<Pass>>;

    async fn list_places(&self) -> Result<Vec<Place>>;

    async fn list_feedback(&self) -> Result<Vec<Feedback>>;
    async fn insert_feedback(&self, new: &NewFeedback, author: Option<Uuid>) -> Result<Feedback>;
}

/// Outbound transactional mail.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message; returns the provider's message id.
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<String>;
}
