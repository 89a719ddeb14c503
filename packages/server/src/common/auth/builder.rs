use super::{AuthError, Capability};
use crate::domains::identity::Identity;

/// Entry point for authorization checks
///
/// Usage:
/// ```ignore
/// Actor::new(&identity)
///     .can(Capability::ManageBookings)
///     .check()?;
/// ```
pub struct Actor<'a> {
    identity: &'a Identity,
}

impl<'a> Actor<'a> {
    /// Create a new actor for authorization checks. The identity comes from
    /// the session middleware and was already resolved against the provider.
    pub fn new(identity: &'a Identity) -> Self {
        Self { identity }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityCheck<'a> {
        CapabilityCheck {
            identity: self.identity,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityCheck<'a> {
    identity: &'a Identity,
    capability: Capability,
}

impl CapabilityCheck<'_> {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        if !self.identity.is_active {
            return Err(AuthError::PermissionDenied(
                "Account is deactivated".to_string(),
            ));
        }

        if !self.capability.permitted(self.identity.role) {
            return Err(AuthError::PermissionDenied(format!(
                "{:?} is not available to role '{}'",
                self.capability, self.identity.role
            )));
        }

        Ok(())
    }
}
