//! Bookings domain - scheduled visits and their reminder history.

pub mod actions;
pub mod models;

pub use models::{Booking, BookingReminder, BookingStatus, NewBooking, NewReminder};
