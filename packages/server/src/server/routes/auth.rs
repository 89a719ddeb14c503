//! Sign-in, sign-out, and session resolution.

use axum::extract::{Extension, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::common::envelope::Envelope;
use crate::common::error::{ApiError, ApiResult};
use crate::domains::identity::Identity;
use crate::server::app::AppState;
use crate::server::middleware::{bearer_token, AuthUser};

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub access_token: String,
    /// Token lifetime in seconds; the web tier stores the expiry alongside
    /// the token and treats the session as gone once it passes.
    pub expires_in: i64,
    pub identity: Identity,
}

pub async fn sign_in_handler(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> ApiResult<SignInResponse> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let signed_in = state
        .identity
        .password_sign_in(req.email.trim(), &req.password)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let profile = state
        .data
        .get_profile(signed_in.user_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden("No profile for this account".to_string()))?;

    if !profile.is_active {
        return Err(ApiError::Forbidden("Account is deactivated".to_string()));
    }

    tracing::info!(profile_id = %profile.id, role = %profile.role, "Signed in");

    Ok(Json(Envelope::ok(
        "Signed in",
        SignInResponse {
            access_token: signed_in.access_token,
            expires_in: signed_in.expires_in,
            identity: profile.identity(),
        },
    )))
}

pub async fn sign_out_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<()> {
    let token = bearer_token(&headers).ok_or(ApiError::Unauthorized)?;
    state.identity.revoke(token).await?;
    Ok(Json(Envelope::message("Signed out")))
}

/// Resolve the forwarded bearer token to the identity behind it. The session
/// middleware already did the work; this route just surfaces the result.
pub async fn session_handler(user: Option<Extension<AuthUser>>) -> ApiResult<Identity> {
    let user = super::require_user(user)?;
    Ok(Json(Envelope::ok("Session resolved", user.identity)))
}
