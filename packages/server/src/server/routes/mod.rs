// HTTP routes
pub mod auth;
pub mod bookings;
pub mod feedback;
pub mod health;
pub mod passes;
pub mod places;
pub mod profiles;

pub use auth::*;
pub use health::*;

use axum::extract::Extension;

use crate::common::error::ApiError;
use crate::server::middleware::AuthUser;

/// Handlers that require authentication start here; the session middleware
/// never blocks, so an absent extension means no valid session.
pub(crate) fn require_user(user: Option<Extension<AuthUser>>) -> Result<AuthUser, ApiError> {
    user.map(|Extension(user)| user).ok_or(ApiError::Unauthorized)
}
