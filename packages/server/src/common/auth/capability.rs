use crate::domains::identity::Role;

/// Capabilities in the Frontdesk platform
///
/// Routes are permitted per role set with OR semantics: a capability is
/// granted when the identity's role appears in its allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// List, update, activate/deactivate, reset passwords
    ManageProfiles,

    /// Create bookings and send reminders
    ManageBookings,

    /// See the booking schedule
    ViewBookings,

    /// Check visitors in and issue passes
    CheckInVisitors,

    /// See issued passes
    ViewPasses,

    /// Read submitted feedback
    ReviewFeedback,

    /// Leave feedback
    SubmitFeedback,

    /// Browse bookable places
    ViewPlaces,
}

impl Capability {
    /// Roles this capability is granted to. Empty means any authenticated
    /// identity.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Capability::ManageProfiles => &[Role::Admin],
            Capability::ManageBookings => &[Role::Admin, Role::Staff],
            Capability::ViewBookings => &[Role::Admin, Role::Staff, Role::Reception],
            Capability::CheckInVisitors => &[Role::Admin, Role::Reception],
            Capability::ViewPasses => &[Role::Admin, Role::Reception],
            Capability::ReviewFeedback => &[Role::Admin, Role::Assistant],
            Capability::SubmitFeedback => &[],
            Capability::ViewPlaces => &[],
        }
    }

    pub fn permitted(&self, role: Role) -> bool {
        let allowed = self.allowed_roles();
        allowed.is_empty() || allowed.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_is_permitted_everything() {
        for cap in [
            Capability::ManageProfiles,
            Capability::ManageBookings,
            Capability::ViewBookings,
            Capability::CheckInVisitors,
            Capability::ViewPasses,
            Capability::ReviewFeedback,
            Capability::SubmitFeedback,
            Capability::ViewPlaces,
        ] {
            assert!(cap.permitted(Role::Admin), "{:?}", cap);
        }
    }

    #[test]
    fn staff_cannot_manage_profiles() {
        assert!(!Capability::ManageProfiles.permitted(Role::Staff));
        assert!(Capability::ManageBookings.permitted(Role::Staff));
    }

    #[test]
    fn reception_handles_the_desk() {
        assert!(Capability::CheckInVisitors.permitted(Role::Reception));
        assert!(Capability::ViewPasses.permitted(Role::Reception));
        assert!(!Capability::ManageBookings.permitted(Role::Reception));
        assert!(Capability::ViewBookings.permitted(Role::Reception));
    }

    #[test]
    fn open_capabilities_admit_every_role() {
        for role in [Role::Employee, Role::User, Role::Assistant] {
            assert!(Capability::SubmitFeedback.permitted(role));
            assert!(Capability::ViewPlaces.permitted(role));
        }
    }
}
