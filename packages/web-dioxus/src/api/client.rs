//! HTTP client for the Frontdesk API server.
//!
//! Every route answers with the `{success, message, data?, error?}` envelope;
//! this client unwraps it once so callers only see typed payloads.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The normalized response envelope the API wraps everything in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client for making envelope requests
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Create a client with a forwarded bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let envelope = self.perform::<()>(reqwest::Method::GET, path, None).await?;
        decode_data(envelope)
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ClientError> {
        let envelope = self.perform(reqwest::Method::POST, path, body).await?;
        decode_data(envelope)
    }

    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ClientError> {
        let envelope = self.perform(reqwest::Method::PATCH, path, body).await?;
        decode_data(envelope)
    }

    /// POST to a route that answers with a bare success message (no data).
    pub async fn post_message<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, ClientError> {
        let envelope = self.perform(reqwest::Method::POST, path, body).await?;
        Ok(envelope.message)
    }

    async fn perform<B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Envelope<serde_json::Value>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = &self.auth_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        let envelope: Envelope<serde_json::Value> = match response.json().await {
            Ok(envelope) => envelope,
            Err(_) => {
                return Err(ClientError::Api {
                    status,
                    message: "Malformed response".to_string(),
                })
            }
        };

        if !envelope.success {
            return Err(ClientError::Api {
                status,
                message: envelope.error.unwrap_or(envelope.message),
            });
        }

        Ok(envelope)
    }
}

fn decode_data<R: DeserializeOwned>(
    envelope: Envelope<serde_json::Value>,
) -> Result<R, ClientError> {
    let data = envelope.data.ok_or(ClientError::NoData)?;
    Ok(serde_json::from_value(data)?)
}

/// Create a client for server-side requests (direct to the API)
#[cfg(feature = "server")]
pub fn server_client() -> ApiClient {
    let url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    ApiClient::new(url)
}
