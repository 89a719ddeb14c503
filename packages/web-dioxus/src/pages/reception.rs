//! Reception desk: today's visits, check-in, and issued passes.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::components::{AppNav, LoadingSpinner};
use crate::routes::Route;
use crate::session::RequireRole;
use crate::types::{Booking, BookingStatus, CheckedIn, Pass, Role};

/// Reception desk, for reception (and admins covering the desk).
#[component]
pub fn ReceptionDesk() -> Element {
    rsx! {
        RequireRole {
            allow: vec![Role::Reception, Role::Admin],
            fallback: Route::Home {},
            AppNav {}
            main {
                class: "p-6",
                DeskBoard {}
            }
        }
    }
}

#[component]
fn DeskBoard() -> Element {
    let mut today = use_resource(fetch_today);
    let mut passes = use_resource(fetch_passes);
    let mut notice = use_signal(|| None::<String>);

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Reception desk" }

            if let Some(message) = notice() {
                div {
                    class: "mb-4 p-3 bg-sky-50 border border-sky-200 text-sky-800 rounded text-sm",
                    "{message}"
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-2 gap-6",

                // Today's visits
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Today's visits" }
                    match &*today.read_unchecked() {
                        Some(Ok(rows)) if !rows.is_empty() => rsx! {
                            div {
                                class: "space-y-3",
                                for booking in rows.iter().cloned() {
                                    VisitRow {
                                        booking,
                                        on_checked_in: move |checked_in: CheckedIn| {
                                            notice.set(Some(format!(
                                                "Checked in - pass {}",
                                                checked_in.pass.code
                                            )));
                                            today.restart();
                                            passes.restart();
                                        }
                                    }
                                }
                            }
                        },
                        Some(Ok(_)) => rsx! {
                            p { class: "text-gray-500", "No visits scheduled today." }
                        },
                        Some(Err(e)) => rsx! {
                            div {
                                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                                "Error: {e}"
                            }
                        },
                        None => rsx! {
                            div { class: "py-8", LoadingSpinner {} }
                        },
                    }
                }

                // Issued passes
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Issued passes" }
                    match &*passes.read_unchecked() {
                        Some(Ok(rows)) if !rows.is_empty() => rsx! {
                            div {
                                class: "space-y-2",
                                for pass in rows.iter() {
                                    div {
                                        class: "flex items-center justify-between text-sm border-b border-gray-100 pb-2",
                                        span { class: "font-mono font-medium text-gray-900", "{pass.code}" }
                                        span { class: "text-gray-500", "{pass.issued_at}" }
                                    }
                                }
                            }
                        },
                        Some(Ok(_)) => rsx! {
                            p { class: "text-gray-500", "No passes issued yet." }
                        },
                        Some(Err(e)) => rsx! {
                            div {
                                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                                "Error: {e}"
                            }
                        },
                        None => rsx! {
                            div { class: "py-8", LoadingSpinner {} }
                        },
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct VisitRowProps {
    booking: Booking,
    on_checked_in: EventHandler<CheckedIn>,
}

#[component]
fn VisitRow(props: VisitRowProps) -> Element {
    let booking = props.booking.clone();
    let on_checked_in = props.on_checked_in;
    let id = booking.id;
    let mut error = use_signal(|| None::<String>);

    let handle_check_in = move |_| {
        spawn(async move {
            match check_in(id).await {
                Ok(checked_in) => on_checked_in.call(checked_in),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "flex items-center justify-between",
            div {
                p { class: "font-medium text-gray-900", "{booking.visitor_name}" }
                p { class: "text-xs text-gray-500", "{booking.scheduled_for}" }
                if let Some(err) = error() {
                    p { class: "text-xs text-red-600 mt-1", "{err}" }
                }
            }
            match booking.status {
                BookingStatus::Scheduled => rsx! {
                    button {
                        class: "bg-sky-700 text-white text-sm py-1.5 px-3 rounded-md hover:bg-sky-800",
                        onclick: handle_check_in,
                        "Check in"
                    }
                },
                BookingStatus::CheckedIn => rsx! {
                    span {
                        class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800",
                        "Checked in"
                    }
                },
                BookingStatus::Cancelled => rsx! {
                    span {
                        class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-gray-200 text-gray-600",
                        "Cancelled"
                    }
                },
            }
        }
    }
}

#[server]
async fn fetch_today() -> Result<Vec<Booking>, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    let today = chrono::Utc::now().date_naive();
    client
        .get(&format!("/api/bookings?on={}", today))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn fetch_passes() -> Result<Vec<Pass>, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    client
        .get("/api/passes")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn check_in(id: Uuid) -> Result<CheckedIn, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    client
        .post::<(), CheckedIn>(&format!("/api/bookings/{}/check-in", id), None)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
