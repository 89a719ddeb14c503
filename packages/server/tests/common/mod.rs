//! Shared test harness: the API router wired to in-memory fakes.
//!
//! The fakes implement the gateway traits over `Mutex<Vec<_>>` so tests can
//! seed rows, drive routes through `tower::ServiceExt::oneshot`, and assert
//! on both the HTTP envelope and the stored state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use server_core::domains::bookings::{
    Booking, BookingReminder, BookingStatus, NewBooking, NewReminder,
};
use server_core::domains::feedback::{Feedback, NewFeedback};
use server_core::domains::gateway::{DataGateway, IdentityProvider, Mailer, SignedIn};
use server_core::domains::identity::{Identity, Role};
use server_core::domains::passes::{NewPass, Pass};
use server_core::domains::places::Place;
use server_core::domains::profiles::{Profile, ProfilePatch};
use server_core::server::{api_router, AppState};

// ============================================================================
// Fakes
// ============================================================================

#[derive(Default)]
pub struct FakeIdentityProvider {
    /// token -> identity
    pub identities: Mutex<HashMap<String, Identity>>,
    /// email -> (password, session)
    pub credentials: Mutex<HashMap<String, (String, SignedIn)>>,
    pub revoked: Mutex<Vec<String>>,
    pub recovery_requests: Mutex<Vec<String>>,
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn resolve_identity(&self, access_token: &str) -> Option<Identity> {
        let identities = self.identities.lock().unwrap();
        identities
            .get(access_token)
            .filter(|identity| identity.is_active)
            .cloned()
    }

    async fn password_sign_in(&self, email: &str, password: &str) -> Result<Option<SignedIn>> {
        let credentials = self.credentials.lock().unwrap();
        Ok(credentials
            .get(email)
            .filter(|(stored, _)| stored == password)
            .map(|(_, session)| session.clone()))
    }

    async fn revoke(&self, access_token: &str) -> Result<()> {
        self.revoked.lock().unwrap().push(access_token.to_string());
        Ok(())
    }

    async fn recovery_link(&self, email: &str) -> Result<String> {
        self.recovery_requests.lock().unwrap().push(email.to_string());
        Ok(format!("https://auth.example/recover?email={}", email))
    }
}

#[derive(Default)]
pub struct FakeDataGateway {
    pub profiles: Mutex<Vec<Profile>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub reminders: Mutex<Vec<BookingReminder>>,
    pub passes: Mutex<Vec<Pass>>,
    pub places: Mutex<Vec<Place>>,
    pub feedback: Mutex<Vec<Feedback>>,
}

#[async_trait]
impl DataGateway for FakeDataGateway {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn update_profile(&self, id: Uuid, patch: &ProfilePatch) -> Result<Option<Profile>> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(profile) = profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.display_name {
            profile.display_name = Some(name.clone());
        }
        if let Some(role) = patch.role {
            profile.role = role;
        }
        profile.updated_at = Some(Utc::now());
        Ok(Some(profile.clone()))
    }

    async fn set_profile_active(
        &self,
        id: Uuid,
        active: bool,
        reason: Option<&str>,
    ) -> Result<Option<Profile>> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(profile) = profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        profile.is_active = active;
        profile.deactivation_reason = reason.map(str::to_string);
        profile.updated_at = Some(Utc::now());
        Ok(Some(profile.clone()))
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn list_bookings(&self, on: Option<NaiveDate>) -> Result<Vec<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| on.map_or(true, |day| b.scheduled_for.date_naive() == day))
            .cloned()
            .collect())
    }

    async fn create_booking(&self, new: &NewBooking) -> Result<Booking> {
        let booking = Booking {
            id: Uuid::new_v4(),
            visitor_name: new.visitor_name.clone(),
            visitor_email: new.visitor_email.clone(),
            host_profile_id: new.host_profile_id,
            place_id: new.place_id,
            scheduled_for: new.scheduled_for,
            status: BookingStatus::Scheduled,
            checked_in_at: None,
            created_at: Utc::now(),
        };
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }

    async fn mark_checked_in(&self, id: Uuid) -> Result<Option<Booking>> {
        let mut bookings = self.bookings.lock().unwrap();
        let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        booking.status = BookingStatus::CheckedIn;
        booking.checked_in_at = Some(Utc::now());
        Ok(Some(booking.clone()))
    }

    async fn append_reminder(&self, reminder: &NewReminder) -> Result<BookingReminder> {
        let row = BookingReminder {
            id: Uuid::new_v4(),
            booking_id: reminder.booking_id,
            sent_to: reminder.sent_to.clone(),
            sent_at: reminder.sent_at,
            message_id: reminder.message_id.clone(),
        };
        self.reminders.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn issue_pass(&self, new: &NewPass) -> Result<Pass> {
        let pass = Pass {
            id: Uuid::new_v4(),
            booking_id: new.booking_id,
            code: new.code.clone(),
            issued_by: new.issued_by,
            issued_at: new.issued_at,
        };
        self.passes.lock().unwrap().push(pass.clone());
        Ok(pass)
    }

    async fn list_passes(&self) -> Result<Vec<Pass>> {
        Ok(self.passes.lock().unwrap().clone())
    }

    async fn list_places(&self) -> Result<Vec<Place>> {
        Ok(self.places.lock().unwrap().clone())
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>> {
        Ok(self.feedback.lock().unwrap().clone())
    }

    async fn insert_feedback(&self, new: &NewFeedback, author: Option<Uuid>) -> Result<Feedback> {
        let entry = Feedback {
            id: Uuid::new_v4(),
            author_profile_id: author,
            message: new.message.clone(),
            rating: new.rating,
            created_at: Utc::now(),
        };
        self.feedback.lock().unwrap().push(entry.clone());
        Ok(entry)
    }
}

#[derive(Default)]
pub struct FakeMailer {
    /// (to, subject) per send, in order.
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((to.to_string(), subject.to_string()));
        Ok(format!("msg-{}", sent.len()))
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct TestHarness {
    pub app: Router,
    pub provider: Arc<FakeIdentityProvider>,
    pub data: Arc<FakeDataGateway>,
    pub mailer: Arc<FakeMailer>,
}

impl TestHarness {
    /// Harness with one active profile + token per role. Tokens follow the
    /// pattern `<role>-token`; a deactivated admin is reachable via
    /// `suspended-token`.
    pub fn new() -> Self {
        let provider = Arc::new(FakeIdentityProvider::default());
        let data = Arc::new(FakeDataGateway::default());
        let mailer = Arc::new(FakeMailer::default());

        for role in [Role::Admin, Role::Staff, Role::Reception, Role::Assistant] {
            seed_account(&provider, &data, role, true, format!("{}-token", role));
        }
        seed_account(&provider, &data, Role::Admin, false, "suspended-token".to_string());

        let state = AppState {
            identity: provider.clone(),
            data: data.clone(),
            mailer: mailer.clone(),
        };

        Self {
            app: api_router(state),
            provider,
            data,
            mailer,
        }
    }

    /// Issue a request and return (status, parsed JSON body).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Id of the seeded profile behind `<role>-token`.
    pub fn profile_id(&self, role: Role) -> Uuid {
        self.provider
            .identities
            .lock()
            .unwrap()
            .get(&format!("{}-token", role))
            .map(|identity| identity.id)
            .expect("seeded role")
    }
}

fn seed_account(
    provider: &FakeIdentityProvider,
    data: &FakeDataGateway,
    role: Role,
    is_active: bool,
    token: String,
) {
    let id = Uuid::new_v4();
    let email = format!("{}@frontdesk.example", token.trim_end_matches("-token"));
    let profile = Profile {
        id,
        email: email.clone(),
        display_name: Some(format!("Test {}", role)),
        role,
        is_active,
        deactivation_reason: None,
        created_at: Utc::now(),
        updated_at: None,
    };

    provider
        .identities
        .lock()
        .unwrap()
        .insert(token, profile.identity());
    data.profiles.lock().unwrap().push(profile);
}
