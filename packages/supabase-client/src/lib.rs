//! Thin Supabase REST client.
//!
//! Covers the two surfaces this platform uses: the auth API (password grant,
//! token introspection, sign-out, admin recovery links) and PostgREST table
//! access. Every request carries the project's `apikey` header; data access
//! uses the service-role key, token introspection forwards the caller's
//! bearer token.
//!
//! # Example
//!
//! ```rust,ignore
//! use supabase_client::{SupabaseClient, SupabaseOptions};
//!
//! let client = SupabaseClient::new(SupabaseOptions {
//!     project_url: "https://xyzcompany.supabase.co".into(),
//!     anon_key: "anon".into(),
//!     service_role_key: "service".into(),
//! });
//!
//! let session = client.sign_in_with_password("a@b.c", "secret").await?;
//! let user = client.get_user(&session.access_token).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SupabaseError};
pub use types::{AuthSession, AuthUser, GeneratedLink};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use types::ErrorBody;

#[derive(Debug, Clone)]
pub struct SupabaseOptions {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`.
    pub project_url: String,
    pub anon_key: String,
    pub service_role_key: String,
}

#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    options: SupabaseOptions,
}

impl SupabaseClient {
    pub fn new(options: SupabaseOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.options.project_url.trim_end_matches('/'), path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.options.project_url.trim_end_matches('/'), table)
    }

    async fn into_api_error(resp: reqwest::Response) -> SupabaseError {
        let status = resp.status().as_u16();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.into_message().unwrap_or_default(),
            Err(_) => String::new(),
        };
        SupabaseError::Api { status, message }
    }

    // ------------------------------------------------------------------
    // Auth API
    // ------------------------------------------------------------------

    /// Exchange email + password for a session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession> {
        let url = format!("{}?grant_type=password", self.auth_url("token"));
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.options.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::into_api_error(resp).await);
        }
        Ok(resp.json::<AuthSession>().await?)
    }

    /// Resolve an access token to the user it belongs to.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        let resp = self
            .client
            .get(self.auth_url("user"))
            .header("apikey", &self.options.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::into_api_error(resp).await);
        }
        Ok(resp.json::<AuthUser>().await?)
    }

    /// Revoke the session behind an access token. Already-revoked tokens
    /// come back 401 from the API; callers treat sign-out as idempotent.
    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let resp = self
            .client
            .post(self.auth_url("logout"))
            .header("apikey", &self.options.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::into_api_error(resp).await);
        }
        Ok(())
    }

    /// Generate a password-recovery link for a user (admin API, service key).
    pub async fn generate_recovery_link(&self, email: &str) -> Result<GeneratedLink> {
        let resp = self
            .client
            .post(self.auth_url("admin/generate_link"))
            .header("apikey", &self.options.service_role_key)
            .bearer_auth(&self.options.service_role_key)
            .json(&json!({ "type": "recovery", "email": email }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::into_api_error(resp).await);
        }
        Ok(resp.json::<GeneratedLink>().await?)
    }

    // ------------------------------------------------------------------
    // PostgREST table access (service-role key)
    // ------------------------------------------------------------------

    /// Fetch all rows of `table` matching the given PostgREST filters.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut req = self
            .client
            .get(self.rest_url(table))
            .header("apikey", &self.options.service_role_key)
            .bearer_auth(&self.options.service_role_key)
            .query(&[("select", "*")]);
        for (key, value) in filters {
            req = req.query(&[(*key, value.as_str())]);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(Self::into_api_error(resp).await);
        }
        Ok(resp.json::<Vec<T>>().await?)
    }

    /// Fetch a single row by id. Returns `None` when no row matches.
    pub async fn select_by_id<T: DeserializeOwned>(&self, table: &str, id: &str) -> Result<Option<T>> {
        let rows: Vec<T> = self
            .select(table, &[("id", format!("eq.{}", id))])
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Insert a row and return the stored representation.
    pub async fn insert<B: Serialize, T: DeserializeOwned>(&self, table: &str, body: &B) -> Result<T> {
        let resp = self
            .client
            .post(self.rest_url(table))
            .header("apikey", &self.options.service_role_key)
            .bearer_auth(&self.options.service_role_key)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::into_api_error(resp).await);
        }

        let mut rows: Vec<T> = resp.json().await?;
        rows.pop().ok_or(SupabaseError::Api {
            status: 500,
            message: "insert returned no representation".to_string(),
        })
    }

    /// Patch a row by id and return the updated representation, or `None`
    /// when no row matched the id.
    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        patch: &B,
    ) -> Result<Option<T>> {
        let resp = self
            .client
            .patch(self.rest_url(table))
            .header("apikey", &self.options.service_role_key)
            .bearer_auth(&self.options.service_role_key)
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{}", id))])
            .json(patch)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::into_api_error(resp).await);
        }

        let mut rows: Vec<T> = resp.json().await?;
        Ok(rows.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new(SupabaseOptions {
            project_url: "https://example.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
            service_role_key: "service".to_string(),
        })
    }

    #[test]
    fn auth_url_strips_trailing_slash() {
        let c = client();
        assert_eq!(c.auth_url("user"), "https://example.supabase.co/auth/v1/user");
        assert_eq!(
            c.auth_url("admin/generate_link"),
            "https://example.supabase.co/auth/v1/admin/generate_link"
        );
    }

    #[test]
    fn rest_url_points_at_table() {
        let c = client();
        assert_eq!(c.rest_url("profiles"), "https://example.supabase.co/rest/v1/profiles");
    }
}
