//! `SupabaseClient` as identity provider and data gateway.
//!
//! Token resolution is two upstream calls: introspect the token against the
//! auth API, then load the profile row for role and active flag. Both are
//! read-only; any failure collapses to `None`.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use supabase_client::{SupabaseClient, SupabaseError};
use uuid::Uuid;

use crate::domains::bookings::{Booking, BookingReminder, NewBooking, NewReminder};
use crate::domains::feedback::{Feedback, NewFeedback};
use crate::domains::gateway::{DataGateway, IdentityProvider, SignedIn};
use crate::domains::identity::Identity;
use crate::domains::passes::{NewPass, Pass};
use crate::domains::places::Place;
use crate::domains::profiles::{Profile, ProfilePatch};

const PROFILES: &str = "profiles";
const BOOKINGS: &str = "bookings";
const BOOKING_REMINDERS: &str = "booking_reminders";
const PASSES: &str = "passes";
const PLACES: &str = "places";
const FEEDBACK: &str = "feedback";

#[async_trait]
impl IdentityProvider for SupabaseClient {
    async fn resolve_identity(&self, access_token: &str) -> Option<Identity> {
        let user = match self.get_user(access_token).await {
            Ok(user) => user,
            Err(err) => {
                if !err.is_unauthorized() {
                    tracing::warn!(error = %err, "Token introspection failed");
                }
                return None;
            }
        };

        let profile: Option<Profile> = match self
            .select_by_id(PROFILES, &user.id.to_string())
            .await
        {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!(error = %err, user_id = %user.id, "Profile lookup failed");
                return None;
            }
        };

        match profile {
            Some(profile) if profile.is_active => Some(profile.identity()),
            _ => None,
        }
    }

    async fn password_sign_in(&self, email: &str, password: &str) -> Result<Option<SignedIn>> {
        match self.sign_in_with_password(email, password).await {
            Ok(session) => Ok(Some(SignedIn {
                access_token: session.access_token,
                expires_in: session.expires_in,
                user_id: session.user.id,
            })),
            // The auth API answers 400 for a bad grant and 401/403 for bad
            // keys or banned users; none of those are our failure.
            Err(SupabaseError::Api { status, .. }) if status == 400 || status == 401 || status == 403 => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn revoke(&self, access_token: &str) -> Result<()> {
        match self.sign_out(access_token).await {
            Ok(()) => Ok(()),
            // Already revoked or expired: sign-out stays idempotent.
            Err(err) if err.is_unauthorized() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn recovery_link(&self, email: &str) -> Result<String> {
        Ok(self.generate_recovery_link(email).await?.action_link)
    }
}

#[async_trait]
impl DataGateway for SupabaseClient {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>> {
        Ok(self.select_by_id(PROFILES, &id.to_string()).await?)
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        Ok(self
            .select(PROFILES, &[("order", "created_at.desc".to_string())])
            .await?)
    }

    async fn update_profile(&self, id: Uuid, patch: &ProfilePatch) -> Result<Option<Profile>> {
        Ok(self.update(PROFILES, &id.to_string(), patch).await?)
    }

    async fn set_profile_active(
        &self,
        id: Uuid,
        active: bool,
        reason: Option<&str>,
    ) -> Result<Option<Profile>> {
        let patch = json!({
            "is_active": active,
            "deactivation_reason": reason,
        });
        Ok(self.update(PROFILES, &id.to_string(), &patch).await?)
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        Ok(self.select_by_id(BOOKINGS, &id.to_string()).await?)
    }

    async fn list_bookings(&self, on: Option<NaiveDate>) -> Result<Vec<Booking>> {
        let mut filters = vec![("order", "scheduled_for.asc".to_string())];
        if let Some(day) = on {
            filters.push(("scheduled_for", format!("gte.{}T00:00:00Z", day)));
            if let Some(next) = day.succ_opt() {
                filters.push(("scheduled_for", format!("lt.{}T00:00:00Z", next)));
            }
        }
        Ok(self.select(BOOKINGS, &filters).await?)
    }

    async fn create_booking(&self, new: &NewBooking) -> Result<Booking> {
        Ok(self.insert(BOOKINGS, new).await?)
    }

    async fn mark_checked_in(&self, id: Uuid) -> Result<Option<Booking>> {
        let patch = json!({
            "status": "checked_in",
            "checked_in_at": chrono::Utc::now(),
        });
        Ok(self.update(BOOKINGS, &id.to_string(), &patch).await?)
    }

    async fn append_reminder(&self, reminder: &NewReminder) -> Result<BookingReminder> {
        Ok(self.insert(BOOKING_REMINDERS, reminder).await?)
    }

    async fn issue_pass(&self, new: &NewPass) -> Result<Pass> {
        Ok(self.insert(PASSES, new).await?)
    }

    async fn list_passes(&self) -> Result<Vec<Pass>> {
        Ok(self
            .select(PASSES, &[("order", "issued_at.desc".to_string())])
            .await?)
    }

    async fn list_places(&self) -> Result<Vec<Place>> {
        Ok(self.select(PLACES, &[("order", "name.asc".to_string())]).await?)
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>> {
        Ok(self
            .select(FEEDBACK, &[("order", "created_at.desc".to_string())])
            .await?)
    }

    async fn insert_feedback(&self, new: &NewFeedback, author: Option<Uuid>) -> Result<Feedback> {
        let body = json!({
            "message": new.message,
            "rating": new.rating,
            "author_profile_id": author,
        });
        Ok(self.insert(FEEDBACK, &body).await?)
    }
}
