//! Public landing page

use dioxus::prelude::*;

use crate::routes::{dashboard_route, Route};
use crate::session::use_session;

/// Landing page: the only place the guards fall back to.
#[component]
pub fn Home() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",
            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full text-center",
                h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Frontdesk" }
                p { class: "text-gray-600 mb-6", "Visitor and booking management" }

                if let Some(identity) = session.identity() {
                    div {
                        p {
                            class: "text-sm text-gray-600 mb-4",
                            "Signed in as {identity.name()}"
                        }
                        Link {
                            to: dashboard_route(identity.role),
                            class: "inline-block bg-sky-700 text-white py-2 px-6 rounded-md hover:bg-sky-800",
                            "Go to your dashboard"
                        }
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "inline-block bg-sky-700 text-white py-2 px-6 rounded-md hover:bg-sky-800",
                        "Sign in"
                    }
                }
            }
        }
    }
}
