//! Booking schedule, reminders, and the reception check-in flow.

use axum::extract::{Extension, Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::common::auth::{Actor, Capability};
use crate::common::envelope::Envelope;
use crate::common::error::ApiResult;
use crate::domains::bookings::{actions, Booking, BookingReminder, NewBooking};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

use super::require_user;

#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// Restrict to visits scheduled on this day (UTC).
    pub on: Option<NaiveDate>,
}

pub async fn list_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Query(query): Query<ListBookingsQuery>,
) -> ApiResult<Vec<Booking>> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ViewBookings).check()?;

    let bookings = actions::list(state.data.as_ref(), query.on).await?;
    Ok(Json(Envelope::ok("Bookings loaded", bookings)))
}

pub async fn create_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Json(new): Json<NewBooking>,
) -> ApiResult<Booking> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ManageBookings).check()?;

    let booking = actions::create(state.data.as_ref(), new).await?;
    Ok(Json(Envelope::ok("Booking created", booking)))
}

pub async fn send_reminder_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> ApiResult<BookingReminder> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ManageBookings).check()?;

    let reminder = actions::send_reminder(state.data.as_ref(), state.mailer.as_ref(), id).await?;
    Ok(Json(Envelope::ok("Reminder sent", reminder)))
}

pub async fn check_in_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> ApiResult<actions::CheckedIn> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::CheckInVisitors).check()?;

    let checked_in = actions::check_in(state.data.as_ref(), id, Some(user.identity.id)).await?;
    Ok(Json(Envelope::ok("Visitor checked in", checked_in)))
}
