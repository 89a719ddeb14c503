//! Booking flow tests: creation, reminder history, and check-in with pass
//! issuance.

mod common;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use common::TestHarness;
use serde_json::json;
use server_core::domains::bookings::{Booking, BookingStatus};
use uuid::Uuid;

fn seed_booking(harness: &TestHarness, scheduled: chrono::DateTime<Utc>) -> Uuid {
    let booking = Booking {
        id: Uuid::new_v4(),
        visitor_name: "Grace Hopper".to_string(),
        visitor_email: "grace@example.com".to_string(),
        host_profile_id: None,
        place_id: None,
        scheduled_for: scheduled,
        status: BookingStatus::Scheduled,
        checked_in_at: None,
        created_at: Utc::now(),
    };
    let id = booking.id;
    harness.data.bookings.lock().unwrap().push(booking);
    id
}

#[tokio::test]
async fn create_requires_a_visitor_name() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .request(
            "POST",
            "/api/bookings",
            Some("staff-token"),
            Some(json!({
                "visitor_name": "  ",
                "visitor_email": "grace@example.com",
                "scheduled_for": "2025-06-01T09:00:00Z",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Visitor name is required");
}

#[tokio::test]
async fn create_rejects_a_malformed_email() {
    let harness = TestHarness::new();
    let (status, _) = harness
        .request(
            "POST",
            "/api/bookings",
            Some("staff-token"),
            Some(json!({
                "visitor_name": "Grace Hopper",
                "visitor_email": "not-an-email",
                "scheduled_for": "2025-06-01T09:00:00Z",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_stores_the_booking() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .request(
            "POST",
            "/api/bookings",
            Some("staff-token"),
            Some(json!({
                "visitor_name": "Grace Hopper",
                "visitor_email": "grace@example.com",
                "scheduled_for": "2025-06-01T09:00:00Z",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "scheduled");
    assert_eq!(harness.data.bookings.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn list_filters_by_day() {
    let harness = TestHarness::new();
    seed_booking(&harness, Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap());
    seed_booking(&harness, Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap());

    let (status, body) = harness
        .request("GET", "/api/bookings?on=2025-06-01", Some("reception-token"), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn send_reminder_appends_history_every_time() {
    let harness = TestHarness::new();
    let id = seed_booking(&harness, Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap());
    let uri = format!("/api/bookings/{}/send-reminder", id);

    // Deliberately non-idempotent: two calls, two rows, two emails.
    for _ in 0..2 {
        let (status, body) = harness.request("POST", &uri, Some("staff-token"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["sent_to"], "grace@example.com");
    }

    assert_eq!(harness.data.reminders.lock().unwrap().len(), 2);
    assert_eq!(harness.mailer.sent.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn send_reminder_for_unknown_booking_is_not_found() {
    let harness = TestHarness::new();
    let (status, body) = harness
        .request(
            "POST",
            &format!("/api/bookings/{}/send-reminder", Uuid::new_v4()),
            Some("staff-token"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Booking not found");
    assert!(harness.mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn check_in_issues_a_pass() {
    let harness = TestHarness::new();
    let id = seed_booking(&harness, Utc::now());

    let (status, body) = harness
        .request(
            "POST",
            &format!("/api/bookings/{}/check-in", id),
            Some("reception-token"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["booking"]["status"], "checked_in");
    assert_eq!(body["data"]["pass"]["code"].as_str().unwrap().len(), 8);
    assert_eq!(harness.data.passes.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn double_check_in_is_rejected() {
    let harness = TestHarness::new();
    let id = seed_booking(&harness, Utc::now());
    let uri = format!("/api/bookings/{}/check-in", id);

    harness.request("POST", &uri, Some("reception-token"), None).await;
    let (status, body) = harness.request("POST", &uri, Some("reception-token"), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Booking is already checked in");
    // Still only the first pass.
    assert_eq!(harness.data.passes.lock().unwrap().len(), 1);
}
