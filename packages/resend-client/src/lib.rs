//! Pure Resend REST API client.
//!
//! Minimal client for the Resend transactional email API: compose a message,
//! post it, get back the provider's message id. Delivery guarantees are the
//! provider's problem.
//!
//! # Example
//!
//! ```rust,ignore
//! use resend_client::{Email, ResendClient};
//!
//! let client = ResendClient::new("re_123".into());
//! let sent = client
//!     .send(&Email {
//!         from: "Frontdesk <no-reply@frontdesk.example>".into(),
//!         to: vec!["visitor@example.com".into()],
//!         subject: "Your visit tomorrow".into(),
//!         html: "<p>See you at 9:00.</p>".into(),
//!     })
//!     .await?;
//! println!("queued as {}", sent.id);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BASE_URL: &str = "https://api.resend.com";

pub type Result<T> = std::result::Result<T, ResendError>;

#[derive(Debug, Error)]
pub enum ResendError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Resend API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Outbound message. `html` is the rendered body; Resend handles the rest.
#[derive(Debug, Clone, Serialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

pub struct ResendClient {
    client: reqwest::Client,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Send one email. Returns the provider's message id.
    pub async fn send(&self, email: &Email) -> Result<SentEmail> {
        let url = format!("{}/emails", BASE_URL);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ResendError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let sent: SentEmail = resp.json().await?;
        tracing::debug!(message_id = %sent.id, "Email accepted by Resend");
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_serializes_with_plural_recipients() {
        let email = Email {
            from: "a@b.c".to_string(),
            to: vec!["x@y.z".to_string(), "q@y.z".to_string()],
            subject: "hi".to_string(),
            html: "<p>hi</p>".to_string(),
        };
        let value = serde_json::to_value(&email).unwrap();
        assert_eq!(value["to"].as_array().unwrap().len(), 2);
        assert_eq!(value["subject"], "hi");
    }
}
