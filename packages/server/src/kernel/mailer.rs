use anyhow::Result;
use async_trait::async_trait;
use resend_client::{Email, ResendClient};

use crate::domains::gateway::Mailer;

/// Resend-backed mailer with a fixed sender address.
pub struct ResendMailer {
    client: ResendClient,
    from: String,
}

impl ResendMailer {
    pub fn new(client: ResendClient, from: String) -> Self {
        Self { client, from }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<String> {
        let sent = self
            .client
            .send(&Email {
                from: self.from.clone(),
                to: vec![to.to_string()],
                subject: subject.to_string(),
                html: html.to_string(),
            })
            .await?;
        Ok(sent.id)
    }
}
