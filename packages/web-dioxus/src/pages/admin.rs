//! Admin dashboard: the profile directory.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::components::{AppNav, LoadingSpinner};
use crate::routes::Route;
use crate::session::RequireRole;
use crate::types::{Profile, Role};

/// Admin dashboard, admitted for admins only.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RequireRole {
            allow: vec![Role::Admin],
            fallback: Route::Home {},
            AppNav {}
            main {
                class: "p-6",
                ProfileDirectory {}
            }
        }
    }
}

#[component]
fn ProfileDirectory() -> Element {
    let mut profiles = use_resource(fetch_profiles);
    let mut notice = use_signal(|| None::<String>);

    let content = match &*profiles.read_unchecked() {
        Some(Ok(rows)) => {
            let total = rows.len();
            let active = rows.iter().filter(|p| p.is_active).count();
            rsx! {
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",
                    StatCard { title: "Profiles", value: total }
                    StatCard { title: "Active", value: active }
                    StatCard { title: "Deactivated", value: total - active }
                }

                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                    table {
                        class: "min-w-full divide-y divide-gray-200",
                        thead {
                            class: "bg-gray-50",
                            tr {
                                Th { label: "Name" }
                                Th { label: "Email" }
                                Th { label: "Role" }
                                Th { label: "Status" }
                                Th { label: "Actions" }
                            }
                        }
                        tbody {
                            class: "divide-y divide-gray-200",
                            for profile in rows.iter().cloned() {
                                ProfileRow {
                                    profile,
                                    on_changed: move |message| {
                                        notice.set(Some(message));
                                        profiles.restart();
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            div {
                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                "Error: {e}"
            }
        },
        None => rsx! {
            div { class: "py-12", LoadingSpinner {} }
        },
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Profiles" }

            if let Some(message) = notice() {
                div {
                    class: "mb-4 p-3 bg-sky-50 border border-sky-200 text-sky-800 rounded text-sm",
                    "{message}"
                }
            }

            {content}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ProfileRowProps {
    profile: Profile,
    on_changed: EventHandler<String>,
}

#[component]
fn ProfileRow(props: ProfileRowProps) -> Element {
    let profile = props.profile.clone();
    let on_changed = props.on_changed;
    let id = profile.id;
    let is_active = profile.is_active;

    let toggle_active = move |_| {
        spawn(async move {
            match set_profile_active(id, !is_active).await {
                Ok(updated) => on_changed.call(if updated.is_active {
                    "Profile activated".to_string()
                } else {
                    "Profile deactivated".to_string()
                }),
                Err(e) => on_changed.call(e.to_string()),
            }
        });
    };

    let reset_password = move |_| {
        spawn(async move {
            match request_password_reset(id).await {
                Ok(message) => on_changed.call(message),
                Err(e) => on_changed.call(e.to_string()),
            }
        });
    };

    rsx! {
        tr {
            td {
                class: "px-4 py-3 text-sm text-gray-900",
                {profile.display_name.clone().unwrap_or_else(|| "\u{2014}".to_string())}
            }
            td { class: "px-4 py-3 text-sm text-gray-600", "{profile.email}" }
            td { class: "px-4 py-3 text-sm text-gray-600", "{profile.role}" }
            td {
                class: "px-4 py-3 text-sm",
                if profile.is_active {
                    span {
                        class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800",
                        "Active"
                    }
                } else {
                    span {
                        class: "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-gray-200 text-gray-700",
                        title: profile.deactivation_reason.clone().unwrap_or_default(),
                        "Deactivated"
                    }
                }
            }
            td {
                class: "px-4 py-3 text-sm space-x-2",
                button {
                    class: "text-sky-700 hover:text-sky-900",
                    onclick: toggle_active,
                    if is_active { "Deactivate" } else { "Activate" }
                }
                button {
                    class: "text-gray-600 hover:text-gray-900",
                    onclick: reset_password,
                    "Reset password"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: usize,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            p { class: "text-sm text-gray-500", "{props.title}" }
            p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ThProps {
    label: &'static str,
}

#[component]
fn Th(props: ThProps) -> Element {
    rsx! {
        th {
            class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
            "{props.label}"
        }
    }
}

#[server]
async fn fetch_profiles() -> Result<Vec<Profile>, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    client
        .get("/api/profiles")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn set_profile_active(id: Uuid, active: bool) -> Result<Profile, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    let path = if active {
        format!("/api/profiles/{}/activate", id)
    } else {
        format!("/api/profiles/{}/deactivate", id)
    };

    client
        .post::<(), Profile>(&path, None)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn request_password_reset(id: Uuid) -> Result<String, ServerFnError> {
    let Some(client) = crate::session::session_client().await? else {
        return Err(ServerFnError::new("Not signed in"));
    };

    client
        .post_message::<()>(&format!("/api/profiles/{}/reset-password", id), None)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
