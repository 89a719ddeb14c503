/// Authorization module for Frontdesk
///
/// Provides a fluent API for authorization checks in handlers:
///
/// ```rust,ignore
/// use server_core::common::auth::{Actor, Capability};
///
/// // In a handler:
/// Actor::new(&auth_user.identity)
///     .can(Capability::ManageProfiles)
///     .check()?;
/// ```
///
/// The capability map is static (role -> capabilities), so checks are
/// synchronous; the identity was already resolved by the session middleware.
mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityCheck};
pub use capability::Capability;
pub use errors::AuthError;
