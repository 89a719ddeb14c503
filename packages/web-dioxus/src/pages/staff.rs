//! Staff dashboard: the booking schedule.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::components::{AppNav, LoadingSpinner};
use crate::routes::Route;
use crate::session::RequireRole;
use crate::types::{Booking, BookingStatus, Role};

/// Staff dashboard: bookings, reminders, and new visits. Admins are also
/// admitted so they can cover for staff.
#[component]
pub fn StaffDashboard() -> Element {
    rsx! {
        RequireRole {
            allow: vec![Role::Staff, Role::Admin],
            fallback: Route::Home {},
            AppNav {}
            main {
                class: "p-6",
                BookingSchedule {}
            }
        }
    }
}

#[component]
fn BookingSchedule() -> Element {
    let mut bookings = use_resource(fetch_bookings);
    let mut notice = use_signal(|| None::<String>);

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Bookings" }

            if let Some(message) = notice() {
                div {
                    class: "mb-4 p-3 bg-sky-50 border border-sky-200 text-sky-800 rounded text-sm",
                    "{message}"
                }
            }

            NewBookingForm {
                on_created: move |_| {
                    notice.set(Some("Booking created".to_string()));
                    bookings.restart();
                }
            }

            match &*bookings.read_unchecked() {
                Some(Ok(rows)) if !rows.is_empty() => rsx! {
                    div {
                        class: "space-y-3",
                        for booking in rows.iter().cloned() {
                            BookingCard {
                                booking,
                                on_notice: move |message| notice.set(Some(message)),
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No bookings scheduled." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error: {e}"
                    }
                },
                None => rsx! {
                    div { class: "py-12", LoadingSpinner {} }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NewBookingFormProps {
    on_created: EventHandler<()>,
}

#[component]
fn NewBookingForm(props: NewBookingFormProps) -> Element {
    let on_created = props.on_created;
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut when = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| {
        let visitor_name = name().trim().to_string();
        let visitor_email = email().trim().to_string();
        let scheduled_for = when();

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match create_booking(visitor_name, visitor_email, scheduled_for).await {
                Ok(_) => {
                    name.set(String::new());
                    email.set(String::new());
                    when.set(String::new());
                    on_created.call(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "New booking" }

            if let Some(err) = error() {
                div {
                    class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                    "{err}"
                }
            }

            form {
                onsubmit: handle_submit,
                class: "grid grid-cols-1 md:grid-cols-4 gap-4 items-end",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Visitor name" }
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        disabled: is_pending()
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Visitor email" }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        disabled: is_pending()
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Scheduled for" }
                    input {
                        r#type: "datetime-local",
                        value: "{when}",
                        oninput: move |e| when.set(e.value()),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        disabled: is_pending()
                    }
                }
                button {
                    r#type: "submit",
                    class: "bg-sky-700 text-white py-2 px-4 rounded-md hover:bg-sky-800 disabled:opacity-50",
                    disabled: is_pending(),
                    if is_pending() { "Saving..." } else { "Create" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BookingCardProps {
    booking: Booking,
    on_notice: EventHandler<String>,
}

#[component]
fn BookingCard(props: BookingCardProps) -> Element {
    let booking = props.booking.clone();
    let on_notice = props.on_notice;
    let id = booking.id;

    let handle_reminder = move |_| {
        spawn(async move {
            match send_reminder(id).await {
                Ok(message) => on_notice.call(message),
                Err(e) => on_notice.call(e.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 flex items-center justify-between",
            div {
                p { class: "font-medium text-gray-900", "{booking.visitor_name}" }
                p { class: "text-sm text-gray-600", "{booking.visitor_email}" }
                p { class: "text-xs text-gray-500 mt-1", "{booking.scheduled_for}" }
            }
            div {
                class: "flex items-center gap-3",
                span {
                    class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-700",
                    {booking.status.label()}
                }
                if booking.status == BookingStatus::Scheduled {
                    button {
                        class: "text-sm text-sky-700 hover:text-sky-900",
                        onclick: handle_reminder,
                        "Send reminder"
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_bookings() -> Result<Vec<Booking>, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    client
        .get("/api/bookings")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn create_booking(
    visitor_name: String,
    visitor_email: String,
    scheduled_for: String,
) -> Result<Booking, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    // The datetime-local input has no zone or seconds; treat it as UTC.
    let scheduled = chrono::NaiveDateTime::parse_from_str(&scheduled_for, "%Y-%m-%dT%H:%M")
        .map_err(|_| ServerFnError::new("A scheduled date and time is required"))?
        .and_utc();

    client
        .post(
            "/api/bookings",
            Some(&serde_json::json!({
                "visitor_name": visitor_name,
                "visitor_email": visitor_email,
                "scheduled_for": scheduled,
            })),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn send_reminder(id: Uuid) -> Result<String, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    client
        .post_message::<()>(&format!("/api/bookings/{}/send-reminder", id), None)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
