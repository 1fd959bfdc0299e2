use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::mail::DeliveryBackend;
use crate::models::{DeliveryOutcome, InvitationNotice};
use crate::render::EmailContent;

/// Invite delivery through an identity provider's admin "invite user by
/// email" endpoint. The provider renders and sends its own email; the
/// invitation parameters travel as user metadata and the invite link is the
/// redirect target.
#[derive(Clone)]
pub struct IdentityInviter {
    client: Client,
    base_url: String,
    service_key: String,
}

#[derive(Deserialize)]
struct InviteReply {
    id: Option<String>,
}

impl IdentityInviter {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        }
    }

    fn invite_endpoint(&self) -> String {
        format!("{}/auth/v1/invite", self.base_url)
    }
}

#[async_trait]
impl DeliveryBackend for IdentityInviter {
    fn name(&self) -> &'static str {
        "identity"
    }

    async fn deliver(
        &self,
        notice: &InvitationNotice,
        _email: &EmailContent,
        invite_url: &str,
    ) -> Result<DeliveryOutcome> {
        let payload = json!({
            "email": notice.invitee_email,
            "data": {
                "invitee_name": notice.invitee_name,
                "inviter_name": notice.inviter_name,
                "hours": notice.hours,
                "mode": notice.mode.as_str(),
                "invitation_token": notice.invitation_token,
            },
            "redirect_to": invite_url,
        });

        let res = self
            .client
            .post(self.invite_endpoint())
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Delivery(format!("Identity invite failed: {}", e)))?;

        if !res.status().is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Delivery(format!(
                "Identity provider error: {}",
                body
            )));
        }

        let user_id = res.json::<InviteReply>().await.ok().and_then(|r| r.id);

        tracing::info!(
            to = %notice.invitee_email,
            user_id = ?user_id,
            "Invitation issued via identity provider"
        );

        Ok(DeliveryOutcome::Sent {
            message_id: user_id,
        })
    }
}
