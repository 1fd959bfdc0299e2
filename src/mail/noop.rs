use async_trait::async_trait;

use crate::error::Result;
use crate::mail::DeliveryBackend;
use crate::models::{DeliveryOutcome, InvitationNotice};
use crate::render::EmailContent;

/// Log-only backend used when no delivery provider is configured. Keeps the
/// invitation flow usable in local development without credentials.
pub struct NoopMailer;

#[async_trait]
impl DeliveryBackend for NoopMailer {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn deliver(
        &self,
        notice: &InvitationNotice,
        email: &EmailContent,
        invite_url: &str,
    ) -> Result<DeliveryOutcome> {
        tracing::info!(
            to = %notice.invitee_email,
            subject = %email.subject,
            invite_url = %invite_url,
            "Would have sent invitation email (no delivery backend configured)"
        );

        Ok(DeliveryOutcome::Skipped {
            reason: "no delivery backend configured, email not sent".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InviteMode;
    use crate::render::render_invite_email;

    #[tokio::test]
    async fn noop_reports_skipped_without_touching_the_network() {
        let notice = InvitationNotice {
            invitee_email: "a@b.com".to_string(),
            invitee_name: "Ann".to_string(),
            inviter_name: "Bo".to_string(),
            hours: 1.0,
            mode: InviteMode::Received,
            invitation_token: "tok123".to_string(),
        };
        let url = "https://app.example/invite/tok123";
        let email = render_invite_email(&notice, url);

        let outcome = NoopMailer
            .deliver(&notice, &email, url)
            .await
            .expect("noop never fails");

        assert!(matches!(outcome, DeliveryOutcome::Skipped { .. }));
    }
}
