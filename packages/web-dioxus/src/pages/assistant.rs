//! Assistant dashboard: feedback review.

use dioxus::prelude::*;

use crate::components::{AppNav, LoadingSpinner};
use crate::routes::Route;
use crate::session::RequireRole;
use crate::types::{Feedback, Role};

/// Assistant dashboard: review what visitors and employees left behind.
#[component]
pub fn AssistantDashboard() -> Element {
    rsx! {
        RequireRole {
            allow: vec![Role::Assistant, Role::Admin],
            fallback: Route::Home {},
            AppNav {}
            main {
                class: "p-6",
                FeedbackBoard {}
            }
        }
    }
}

#[component]
fn FeedbackBoard() -> Element {
    let mut entries = use_resource(fetch_feedback);
    let mut notice = use_signal(|| None::<String>);

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Feedback" }

            if let Some(message) = notice() {
                div {
                    class: "mb-4 p-3 bg-sky-50 border border-sky-200 text-sky-800 rounded text-sm",
                    "{message}"
                }
            }

            FeedbackForm {
                on_submitted: move |_| {
                    notice.set(Some("Feedback submitted".to_string()));
                    entries.restart();
                }
            }

            match &*entries.read_unchecked() {
                Some(Ok(rows)) if !rows.is_empty() => rsx! {
                    div {
                        class: "space-y-3",
                        for entry in rows.iter() {
                            FeedbackCard { entry: entry.clone() }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No feedback yet." }
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
struct FeedbackFormProps {
    on_submitted: EventHandler<()>,
}

#[component]
fn FeedbackForm(props: FeedbackFormProps) -> Element {
    let on_submitted = props.on_submitted;
    let mut message = use_signal(String::new);
    let mut rating = use_signal(|| None::<i16>);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| {
        let text = message().trim().to_string();
        let stars = rating();

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match submit_feedback(text, stars).await {
                Ok(_) => {
                    message.set(String::new());
                    rating.set(None);
                    on_submitted.call(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Leave a note" }

            if let Some(err) = error() {
                div {
                    class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                    "{err}"
                }
            }

            form {
                onsubmit: handle_submit,
                div {
                    class: "mb-4",
                    textarea {
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                        rows: 3,
                        placeholder: "What should the team know?",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        disabled: is_pending()
                    }
                }
                div {
                    class: "flex items-center gap-4",
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                        onchange: move |e| rating.set(e.value().parse::<i16>().ok()),
                        option { value: "", "No rating" }
                        for stars in 1..=5 {
                            option { value: "{stars}", "{stars} / 5" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "bg-sky-700 text-white py-2 px-4 rounded-md hover:bg-sky-800 disabled:opacity-50",
                        disabled: is_pending(),
                        if is_pending() { "Sending..." } else { "Submit" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeedbackCardProps {
    entry: Feedback,
}

#[component]
fn FeedbackCard(props: FeedbackCardProps) -> Element {
    let entry = &props.entry;

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
            div {
                class: "flex items-center justify-between mb-2",
                if let Some(rating) = entry.rating {
                    span {
                        class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-sky-100 text-sky-800",
                        "{rating} / 5"
                    }
                }
                span { class: "text-xs text-gray-500", "{entry.created_at}" }
            }
            p { class: "text-sm text-gray-700", "{entry.message}" }
        }
    }
}

#[server]
async fn fetch_feedback() -> Result<Vec<Feedback>, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    client
        .get("/api/feedback")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn submit_feedback(message: String, rating: Option<i16>) -> Result<Feedback, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    client
        .post(
            "/api/feedback",
            Some(&serde_json::json!({ "message": message, "rating": rating })),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
