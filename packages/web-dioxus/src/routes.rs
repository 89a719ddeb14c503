//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{
    AdminDashboard, AssistantDashboard, Home, Login, ReceptionDesk, StaffDashboard,
};
use crate::types::Role;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    // Role-scoped dashboards, each behind the guard
    #[route("/admin")]
    AdminDashboard {},

    #[route("/staff")]
    StaffDashboard {},

    #[route("/reception")]
    ReceptionDesk {},

    #[route("/assistant")]
    AssistantDashboard {},
}

/// The dashboard a freshly signed-in identity lands on. Roles without a
/// dashboard of their own go back to the public home page.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::Staff => Route::StaffDashboard {},
        Role::Reception => Route::ReceptionDesk {},
        Role::Assistant => Route::AssistantDashboard {},
        Role::Employee | Role::User => Route::Home {},
    }
}
