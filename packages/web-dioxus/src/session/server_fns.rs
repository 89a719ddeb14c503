//! Server functions for authentication
//!
//! These run on the server and manage the cookie session. The session holds
//! only the provider's access token and its expiry; the identity is
//! re-resolved against the API on every request for it.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api::client::ClientError;
use crate::types::Identity;

/// What the cookie session stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    expires_at: chrono::DateTime<chrono::Utc>,
}

/// Sign in with email + password. `Ok(None)` means rejected credentials
/// (or a deactivated account); the session cookie is only written on
/// success.
#[server]
pub async fn sign_in(email: String, password: String) -> Result<Option<Identity>, ServerFnError> {
    let client = crate::api::client::server_client();

    #[derive(Deserialize)]
    struct SignInData {
        access_token: String,
        expires_in: i64,
        identity: Identity,
    }

    let result: Result<SignInData, ClientError> = client
        .post(
            "/api/auth/sign-in",
            Some(&serde_json::json!({ "email": email, "password": password })),
        )
        .await;

    match result {
        Ok(data) => {
            let expires_at = chrono::Utc::now() + chrono::Duration::seconds(data.expires_in);
            set_session(&StoredSession {
                access_token: data.access_token,
                expires_at,
            })
            .await?;
            Ok(Some(data.identity))
        }
        // Bad credentials and deactivated accounts both read as "not signed
        // in" to the login page; the API logged the difference.
        Err(ClientError::Api { status, .. }) if status == 400 || status == 401 || status == 403 => {
            Ok(None)
        }
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

/// Resolve the current session to an identity.
///
/// Read-only: an expired or dead session is reported as `None`, never
/// deleted here. Any API failure also collapses to `None` - the caller
/// always gets a terminal answer.
#[server]
pub async fn resolve_session() -> Result<Option<Identity>, ServerFnError> {
    let Some(stored) = get_session().await? else {
        return Ok(None);
    };

    if stored.expires_at <= chrono::Utc::now() {
        return Ok(None);
    }

    let client = crate::api::client::server_client().with_token(stored.access_token);
    match client.get::<Identity>("/api/session").await {
        Ok(identity) => Ok(Some(identity)),
        Err(_) => Ok(None),
    }
}

/// Sign out: revoke the token upstream and clear the cookie session.
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    if let Some(stored) = get_session().await? {
        // Revocation is best-effort; the cookie clears regardless.
        let client = crate::api::client::server_client().with_token(stored.access_token);
        let _ = client.post_message::<()>("/api/auth/sign-out", None).await;
    }

    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
async fn set_session(stored: &StoredSession) -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .insert("session", stored)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn get_session() -> Result<Option<StoredSession>, ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .get("session")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to read session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}

/// An API client authenticated with the current cookie session's token,
/// for page-level server functions. `None` when there is no live session.
#[cfg(feature = "server")]
pub(crate) async fn session_client() -> Result<Option<crate::api::ApiClient>, ServerFnError> {
    let Some(stored) = get_session().await? else {
        return Ok(None);
    };
    if stored.expires_at <= chrono::Utc::now() {
        return Ok(None);
    }
    Ok(Some(
        crate::api::client::server_client().with_token(stored.access_token),
    ))
}
