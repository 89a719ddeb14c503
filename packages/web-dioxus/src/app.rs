//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::SessionProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Session context wraps the entire app; the router mounts below it
        // so every guard can reach the resolver.
        SessionProvider {
            Router::<Route> {}
        }
    }
}
