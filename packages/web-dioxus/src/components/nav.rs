//! Top navigation bar for the dashboards

use dioxus::prelude::*;

use crate::routes::{dashboard_route, Route};
use crate::session::{sign_out, use_session};

/// Navigation bar shown above every dashboard
#[component]
pub fn AppNav() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let handle_sign_out = move |_| {
        spawn(async move {
            if sign_out().await.is_ok() {
                session.clear();
                navigator.push(Route::Home {});
            }
        });
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                // Logo / Brand
                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-sky-700",
                        "Frontdesk"
                    }

                    if let Some(identity) = session.identity() {
                        div {
                            class: "hidden md:flex items-center gap-1",
                            NavLink { to: dashboard_route(identity.role), label: "Dashboard" }
                        }
                    }
                }

                // User menu
                div {
                    class: "flex items-center gap-4",
                    if let Some(identity) = session.identity() {
                        span {
                            class: "text-sm text-gray-600",
                            "{identity.name()} \u{00b7} {identity.role}"
                        }
                    }
                    button {
                        class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                        onclick: handle_sign_out,
                        "Sign out"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-sky-100 text-sky-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
