//! Session context provider

use dioxus::prelude::*;

use super::server_fns::resolve_session;
use crate::types::{Identity, Role};

/// Where session resolution currently stands.
///
/// Resolution starts `Pending` and always reaches a terminal state: a valid,
/// non-expired session mapped to an active profile becomes `Resolved`,
/// everything else (no session, expiry, lookup failure, inactive profile)
/// becomes `Unresolved`. Callers never see an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Pending,
    Resolved(Identity),
    Unresolved,
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Resolved(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Session context that provides the resolved identity to the entire app
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: Signal<SessionState>,
}

impl SessionContext {
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.read().identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().identity().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().identity().map(|identity| identity.role)
    }

    /// Re-resolve the session from the server.
    ///
    /// Read-only: the stored session is never refreshed or destroyed here,
    /// and every failure collapses to `Unresolved`.
    pub async fn refresh(&self) {
        let next = match resolve_session().await {
            Ok(Some(identity)) => SessionState::Resolved(identity),
            _ => SessionState::Unresolved,
        };
        let mut state = self.state;
        state.set(next);
    }

    /// Drop the resolved identity (sign-out).
    pub fn clear(&self) {
        let mut state = self.state;
        state.set(SessionState::Unresolved);
    }
}

/// Session provider component that wraps the app
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState::Pending);

    let session = SessionContext { state };
    use_context_provider(|| session);

    // Kick off the initial resolution. A guard unmounted before this lands
    // simply never sees the update.
    use_effect(move || {
        spawn(async move {
            session.refresh().await;
        });
    });

    children
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
