use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::mail::DeliveryBackend;
use crate::models::{DeliveryOutcome, InvitationNotice};
use crate::render::EmailContent;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Direct transactional email delivery through the Resend HTTP API.
#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct SendPayload<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendReply {
    id: Option<String>,
}

impl ResendMailer {
    pub fn new(api_key: String, from: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from,
        }
    }
}

#[async_trait]
impl DeliveryBackend for ResendMailer {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn deliver(
        &self,
        notice: &InvitationNotice,
        email: &EmailContent,
        _invite_url: &str,
    ) -> Result<DeliveryOutcome> {
        let payload = SendPayload {
            from: &self.from,
            to: vec![notice.invitee_email.as_str()],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
        };

        let res = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("Mail send failed: {}", e)))?;

        if !res.status().is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Delivery(format!("Resend API error: {}", body)));
        }

        let message_id = res.json::<SendReply>().await.ok().and_then(|r| r.id);

        tracing::info!(
            to = %notice.invitee_email,
            message_id = ?message_id,
            "Invitation email sent via Resend"
        );

        Ok(DeliveryOutcome::Sent { message_id })
    }
}
