use serde::Deserialize;
use uuid::Uuid;

/// User record returned by the auth API (`/auth/v1/user`).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Session returned by the password grant (`/auth/v1/token`).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Response from the admin `generate_link` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedLink {
    pub action_link: String,
}

/// Error body Supabase returns on non-2xx responses. The auth API uses
/// `msg`/`error_description`, PostgREST uses `message`; all are optional.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    pub msg: Option<String>,
    pub error_description: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.message.or(self.msg).or(self.error_description)
    }
}
