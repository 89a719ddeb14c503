use crate::domains::gateway::IdentityProvider;
use crate::domains::identity::Identity;
use axum::http::HeaderMap;
use axum::{extract::Request, middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

/// Authenticated user information resolved from the session token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub identity: Identity,
    /// The raw bearer token, kept so handlers can forward or revoke it.
    pub access_token: String,
}

/// Session authentication middleware
///
/// Extracts the bearer token from the Authorization header, resolves it via
/// the identity provider, and adds AuthUser to request extensions.
/// If no token or an invalid token, the request continues without AuthUser
/// (public access) - handlers decide what requires authentication.
pub async fn session_auth_middleware(
    provider: Arc<dyn IdentityProvider>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(request.headers(), provider.as_ref()).await;

    if let Some(user) = auth_user {
        debug!(
            "Authenticated user: {} (role: {})",
            user.identity.email, user.identity.role
        );
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid session token");
    }

    next.run(request).await
}

/// Resolve the request's bearer token to an active identity
async fn extract_auth_user(
    headers: &HeaderMap,
    provider: &dyn IdentityProvider,
) -> Option<AuthUser> {
    let token = bearer_token(headers)?;
    let identity = provider.resolve_identity(token).await?;

    // Providers only resolve active profiles, but the invariant is cheap to
    // hold here for any implementation.
    if !identity.is_active {
        return None;
    }

    Some(AuthUser {
        identity,
        access_token: token.to_string(),
    })
}

/// Extract the token from an Authorization header (handles both
/// "Bearer <token>" and a raw token).
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    Some(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_prefix_is_stripped() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn raw_token_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
