//! Profile operations, called by the HTTP handlers after authorization.

use uuid::Uuid;

use crate::common::error::ApiError;
use crate::domains::gateway::{DataGateway, IdentityProvider, Mailer};
use crate::domains::profiles::models::{Profile, ProfilePatch, DEFAULT_DEACTIVATION_REASON};

pub async fn list(data: &dyn DataGateway) -> Result<Vec<Profile>, ApiError> {
    Ok(data.list_profiles().await?)
}

pub async fn get(data: &dyn DataGateway, id: Uuid) -> Result<Profile, ApiError> {
    data.get_profile(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
}

pub async fn update(
    data: &dyn DataGateway,
    id: Uuid,
    patch: ProfilePatch,
) -> Result<Profile, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::Validation("Nothing to update".to_string()));
    }

    data.update_profile(id, &patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
}

/// Idempotent: activating an active profile leaves it active.
pub async fn activate(data: &dyn DataGateway, id: Uuid) -> Result<Profile, ApiError> {
    data.set_profile_active(id, true, None)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
}

/// Idempotent flag clear. A missing reason is defaulted, not rejected.
pub async fn deactivate(
    data: &dyn DataGateway,
    id: Uuid,
    reason: Option<String>,
) -> Result<Profile, ApiError> {
    let reason = reason
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DEACTIVATION_REASON.to_string());

    data.set_profile_active(id, false, Some(&reason))
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
}

/// Ask the provider for a recovery link and mail it to the account.
pub async fn reset_password(
    data: &dyn DataGateway,
    provider: &dyn IdentityProvider,
    mailer: &dyn Mailer,
    id: Uuid,
) -> Result<(), ApiError> {
    let profile = data
        .get_profile(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let link = provider.recovery_link(&profile.email).await?;

    let greeting = profile.display_name.as_deref().unwrap_or("there");
    let html = format!(
        "<p>Hi {},</p>\
         <p>A password reset was requested for your Frontdesk account. \
         <a href=\"{}\">Choose a new password</a>.</p>\
         <p>If you did not expect this, you can ignore this email.</p>",
        greeting, link
    );

    mailer
        .send(&profile.email, "Reset your Frontdesk password", &html)
        .await?;

    Ok(())
}
