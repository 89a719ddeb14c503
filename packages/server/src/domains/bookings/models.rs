use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
    CheckedIn,
    Cancelled,
}

/// A scheduled visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub visitor_name: String,
    pub visitor_email: String,
    /// Profile of the person being visited, when known.
    pub host_profile_id: Option<Uuid>,
    pub place_id: Option<Uuid>,
    pub scheduled_for: DateTime<Utc>,
    pub status: BookingStatus,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new booking. The hosted backend assigns the id and
/// defaults `status` to `scheduled`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub visitor_name: String,
    pub visitor_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_profile_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<Uuid>,
    pub scheduled_for: DateTime<Utc>,
}

/// One reminder that was sent for a booking. History rows, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingReminder {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub sent_to: String,
    pub sent_at: DateTime<Utc>,
    /// Provider message id, when the provider reported one.
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReminder {
    pub booking_id: Uuid,
    pub sent_to: String,
    pub sent_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}
