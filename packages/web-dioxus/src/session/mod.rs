//! Session resolution and route authorization.
//!
//! `SessionProvider` resolves the cookie session once per mount and exposes
//! the result as a three-state signal; `RequireRole` is the single guard
//! component every protected page composes.

mod context;
mod guard;
mod server_fns;

pub use context::{use_session, SessionContext, SessionProvider, SessionState};
pub use guard::{decide, RenderDecision, RequireRole};
pub use server_fns::{resolve_session, sign_in, sign_out};

#[cfg(feature = "server")]
pub(crate) use server_fns::session_client;
