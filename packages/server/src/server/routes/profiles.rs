//! Admin console: the profile directory.

use axum::extract::{Extension, Path, State};
use axum::Json;
use uuid::Uuid;

use crate::common::auth::{Actor, Capability};
use crate::common::envelope::Envelope;
use crate::common::error::ApiResult;
use crate::domains::profiles::{actions, DeactivateRequest, Profile, ProfilePatch};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

use super::require_user;

pub async fn list_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
) -> ApiResult<Vec<Profile>> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ManageProfiles).check()?;

    let profiles = actions::list(state.data.as_ref()).await?;
    Ok(Json(Envelope::ok("Profiles loaded", profiles)))
}

pub async fn get_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Profile> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ManageProfiles).check()?;

    let profile = actions::get(state.data.as_ref(), id).await?;
    Ok(Json(Envelope::ok("Profile loaded", profile)))
}

pub async fn update_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProfilePatch>,
) -> ApiResult<Profile> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ManageProfiles).check()?;

    let profile = actions::update(state.data.as_ref(), id, patch).await?;
    Ok(Json(Envelope::ok("Profile updated", profile)))
}

pub async fn activate_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Profile> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ManageProfiles).check()?;

    let profile = actions::activate(state.data.as_ref(), id).await?;
    Ok(Json(Envelope::ok("Profile activated", profile)))
}

pub async fn deactivate_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
    body: Option<Json<DeactivateRequest>>,
) -> ApiResult<Profile> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ManageProfiles).check()?;

    let reason = body.and_then(|Json(req)| req.reason);
    let profile = actions::deactivate(state.data.as_ref(), id, reason).await?;
    Ok(Json(Envelope::ok("Profile deactivated", profile)))
}

pub async fn reset_password_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ManageProfiles).check()?;

    actions::reset_password(
        state.data.as_ref(),
        state.identity.as_ref(),
        state.mailer.as_ref(),
        id,
    )
    .await?;

    Ok(Json(Envelope::message("Password reset email sent")))
}
