//! The route authorization guard.
//!
//! One reusable component, parameterized by the roles a page admits and the
//! route to fall back to. The decision itself is a pure function over the
//! session state so it can be tested without mounting anything.

use dioxus::prelude::*;

use super::context::{use_session, SessionState};
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::types::Role;

/// What a protected page should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDecision<L> {
    /// Resolution still pending: show a neutral loading indicator, never
    /// the protected content.
    Checking,
    /// Render the protected content.
    Authorized,
    /// Navigate away and render nothing.
    Redirecting(L),
}

/// Decide what to render for a page admitting `allow` (OR semantics; empty
/// means any authenticated identity).
///
/// Evaluated only once the resolver has left `Pending`:
/// 1. unresolved session -> redirect,
/// 2. role outside the allow-list -> redirect,
/// 3. otherwise -> authorized.
pub fn decide<L>(state: &SessionState, allow: &[Role], fallback: L) -> RenderDecision<L> {
    match state {
        SessionState::Pending => RenderDecision::Checking,
        SessionState::Unresolved => RenderDecision::Redirecting(fallback),
        SessionState::Resolved(identity) => {
            if !identity.is_active {
                RenderDecision::Redirecting(fallback)
            } else if allow.is_empty() || allow.contains(&identity.role) {
                RenderDecision::Authorized
            } else {
                RenderDecision::Redirecting(fallback)
            }
        }
    }
}

/// Guard component wrapping role-restricted content.
///
/// Reads the session signal, so any later change to the resolved identity
/// re-runs the decision; an expired session flips an `Authorized` page
/// back to `Redirecting`.
#[component]
pub fn RequireRole(allow: Vec<Role>, fallback: Route, children: Element) -> Element {
    let session = use_session();
    let state = session.state();

    match decide(&state, &allow, fallback) {
        RenderDecision::Checking => rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner {}
            }
        },
        RenderDecision::Redirecting(to) => rsx! {
            Redirect { to }
        },
        RenderDecision::Authorized => rsx! { {children} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Identity;
    use uuid::Uuid;

    fn identity(role: Role, is_active: bool) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "person@frontdesk.example".to_string(),
            display_name: None,
            role,
            is_active,
        }
    }

    #[test]
    fn pending_never_authorizes() {
        for allow in [vec![], vec![Role::Admin]] {
            let decision = decide(&SessionState::Pending, &allow, "/");
            assert_eq!(decision, RenderDecision::Checking);
        }
    }

    #[test]
    fn unresolved_redirects_regardless_of_requirement() {
        for allow in [vec![], vec![Role::Admin], vec![Role::Staff, Role::Admin]] {
            let decision = decide(&SessionState::Unresolved, &allow, "/");
            assert_eq!(decision, RenderDecision::Redirecting("/"));
        }
    }

    #[test]
    fn reception_is_redirected_from_a_staff_page() {
        let state = SessionState::Resolved(identity(Role::Reception, true));
        let decision = decide(&state, &[Role::Staff], "/");
        assert_eq!(decision, RenderDecision::Redirecting("/"));
    }

    #[test]
    fn active_admin_is_authorized_for_an_admin_page() {
        let state = SessionState::Resolved(identity(Role::Admin, true));
        let decision = decide(&state, &[Role::Admin], "/");
        assert_eq!(decision, RenderDecision::Authorized);
    }

    #[test]
    fn allow_list_uses_or_semantics() {
        let state = SessionState::Resolved(identity(Role::Reception, true));
        let decision = decide(&state, &[Role::Staff, Role::Reception], "/");
        assert_eq!(decision, RenderDecision::Authorized);
    }

    #[test]
    fn empty_allow_list_admits_any_authenticated_identity() {
        let state = SessionState::Resolved(identity(Role::User, true));
        assert_eq!(decide(&state, &[], "/"), RenderDecision::Authorized);
    }

    #[test]
    fn inactive_identity_is_redirected_even_with_the_right_role() {
        let state = SessionState::Resolved(identity(Role::Admin, false));
        let decision = decide(&state, &[Role::Admin], "/");
        assert_eq!(decision, RenderDecision::Redirecting("/"));
    }
}
