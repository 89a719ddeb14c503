//! Booking operations: schedule, remind, check in.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::common::error::ApiError;
use crate::domains::bookings::models::{
    Booking, BookingReminder, BookingStatus, NewBooking, NewReminder,
};
use crate::domains::gateway::{DataGateway, Mailer};
use crate::domains::passes::{NewPass, Pass};

pub async fn list(data: &dyn DataGateway, on: Option<NaiveDate>) -> Result<Vec<Booking>, ApiError> {
    Ok(data.list_bookings(on).await?)
}

pub async fn create(data: &dyn DataGateway, new: NewBooking) -> Result<Booking, ApiError> {
    if new.visitor_name.trim().is_empty() {
        return Err(ApiError::Validation("Visitor name is required".to_string()));
    }
    if !new.visitor_email.contains('@') {
        return Err(ApiError::Validation(
            "A valid visitor email is required".to_string(),
        ));
    }

    Ok(data.create_booking(&new).await?)
}

/// Send a reminder email and append a history row. Deliberately
/// non-idempotent: every call mails the visitor and adds a row.
pub async fn send_reminder(
    data: &dyn DataGateway,
    mailer: &dyn Mailer,
    id: Uuid,
) -> Result<BookingReminder, ApiError> {
    let booking = data
        .get_booking(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    let message_id = mailer
        .send(
            &booking.visitor_email,
            &reminder_subject(&booking),
            &reminder_body(&booking),
        )
        .await?;

    let reminder = data
        .append_reminder(&NewReminder {
            booking_id: booking.id,
            sent_to: booking.visitor_email.clone(),
            sent_at: Utc::now(),
            message_id: Some(message_id),
        })
        .await?;

    tracing::info!(booking_id = %booking.id, sent_to = %reminder.sent_to, "Reminder sent");
    Ok(reminder)
}

/// Result of a check-in: the updated booking and the freshly issued pass.
#[derive(Debug, Clone, Serialize)]
pub struct CheckedIn {
    pub booking: Booking,
    pub pass: Pass,
}

pub async fn check_in(
    data: &dyn DataGateway,
    id: Uuid,
    issued_by: Option<Uuid>,
) -> Result<CheckedIn, ApiError> {
    let booking = data
        .get_booking(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    match booking.status {
        BookingStatus::Cancelled => {
            return Err(ApiError::Validation(
                "Cannot check in a cancelled booking".to_string(),
            ))
        }
        BookingStatus::CheckedIn => {
            return Err(ApiError::Validation(
                "Booking is already checked in".to_string(),
            ))
        }
        BookingStatus::Scheduled => {}
    }

    let booking = data
        .mark_checked_in(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    let pass = data
        .issue_pass(&NewPass {
            booking_id: booking.id,
            code: NewPass::generate_code(),
            issued_by,
            issued_at: Utc::now(),
        })
        .await?;

    Ok(CheckedIn { booking, pass })
}

fn reminder_subject(booking: &Booking) -> String {
    format!(
        "Reminder: your visit on {}",
        booking.scheduled_for.format("%B %e, %Y")
    )
}

fn reminder_body(booking: &Booking) -> String {
    format!(
        "<p>Hi {},</p>\
         <p>This is a reminder of your visit scheduled for {}. \
         Please bring a photo ID; your pass will be issued at reception.</p>",
        booking.visitor_name,
        booking.scheduled_for.format("%B %e, %Y at %H:%M UTC")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn booking() -> Booking {
        Booking {
            id: Uuid::new_v4(),
            visitor_name: "Ada Lovelace".to_string(),
            visitor_email: "ada@example.com".to_string(),
            host_profile_id: None,
            place_id: None,
            scheduled_for: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
            status: BookingStatus::Scheduled,
            checked_in_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn reminder_subject_names_the_date() {
        let subject = reminder_subject(&booking());
        assert!(subject.contains("March"));
        assert!(subject.contains("2025"));
    }

    #[test]
    fn reminder_body_addresses_the_visitor() {
        let body = reminder_body(&booking());
        assert!(body.contains("Ada Lovelace"));
        assert!(body.contains("09:30"));
    }
}
