pub mod identity;
pub mod noop;
pub mod resend;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;
use crate::models::{DeliveryOutcome, InvitationNotice};
use crate::render::EmailContent;

/// One delivery attempt against a concrete provider.
///
/// Implementations report their own terminal outcome; any error they return
/// is downgraded to a soft failure by the [`Notifier`].
#[async_trait]
pub trait DeliveryBackend: Send + Sync {
    /// Short backend name used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    async fn deliver(
        &self,
        notice: &InvitationNotice,
        email: &EmailContent,
        invite_url: &str,
    ) -> Result<DeliveryOutcome>;
}

/// Wraps the configured delivery backend. Dispatch never returns an error:
/// the invitation was already created upstream, so delivery problems must
/// not fail the request.
pub struct Notifier {
    backend: Arc<dyn DeliveryBackend>,
}

impl Notifier {
    /// Select the delivery backend from available credentials. Precedence:
    /// direct email provider, then identity-provider invites, then log-only.
    pub fn from_config(config: &Config) -> Self {
        let backend: Arc<dyn DeliveryBackend> = if let Some(api_key) = &config.resend_api_key {
            Arc::new(resend::ResendMailer::new(
                api_key.clone(),
                config.mail_from.clone(),
            ))
        } else if let (Some(url), Some(key)) =
            (&config.identity_url, &config.identity_service_key)
        {
            Arc::new(identity::IdentityInviter::new(url.clone(), key.clone()))
        } else {
            tracing::warn!("No delivery backend configured, invitation emails will be logged only");
            Arc::new(noop::NoopMailer)
        };

        tracing::info!(backend = backend.name(), "Delivery backend selected");

        Self { backend }
    }

    pub fn with_backend(backend: Arc<dyn DeliveryBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Single dispatch attempt, no retries.
    pub async fn dispatch(
        &self,
        notice: &InvitationNotice,
        email: &EmailContent,
        invite_url: &str,
    ) -> DeliveryOutcome {
        match self.backend.deliver(notice, email, invite_url).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    to = %notice.invitee_email,
                    error = %err,
                    "Invitation delivery failed, answering success anyway"
                );
                DeliveryOutcome::SoftFailed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorPolicy;
    use crate::error::AppError;
    use crate::models::InviteMode;
    use crate::render::render_invite_email;

    struct FailingBackend;

    #[async_trait]
    impl DeliveryBackend for FailingBackend {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn deliver(
            &self,
            _notice: &InvitationNotice,
            _email: &EmailContent,
            _invite_url: &str,
        ) -> Result<DeliveryOutcome> {
            Err(AppError::Delivery("provider rejected the message".to_string()))
        }
    }

    fn notice() -> InvitationNotice {
        InvitationNotice {
            invitee_email: "a@b.com".to_string(),
            invitee_name: "Ann".to_string(),
            inviter_name: "Bo".to_string(),
            hours: 2.0,
            mode: InviteMode::Helped,
            invitation_token: "tok123".to_string(),
        }
    }

    fn config() -> Config {
        Config {
            server_host: "localhost".to_string(),
            server_port: 8080,
            site_url: None,
            resend_api_key: None,
            mail_from: "TimeBank <invites@timebank.app>".to_string(),
            identity_url: None,
            identity_service_key: None,
            error_policy: ErrorPolicy::Lenient,
        }
    }

    #[tokio::test]
    async fn backend_error_becomes_soft_failure() {
        let notifier = Notifier::with_backend(Arc::new(FailingBackend));
        let notice = notice();
        let url = "https://app.example/invite/tok123";
        let email = render_invite_email(&notice, url);

        let outcome = notifier.dispatch(&notice, &email, url).await;

        assert_eq!(
            outcome,
            DeliveryOutcome::SoftFailed {
                reason: "Delivery failed: provider rejected the message".to_string(),
            }
        );
    }

    #[test]
    fn backend_selection_prefers_resend() {
        let notifier = Notifier::from_config(&Config {
            resend_api_key: Some("re_123".to_string()),
            identity_url: Some("https://id.example".to_string()),
            identity_service_key: Some("service-key".to_string()),
            ..config()
        });
        assert_eq!(notifier.backend_name(), "resend");
    }

    #[test]
    fn backend_selection_falls_back_to_identity() {
        let notifier = Notifier::from_config(&Config {
            identity_url: Some("https://id.example".to_string()),
            identity_service_key: Some("service-key".to_string()),
            ..config()
        });
        assert_eq!(notifier.backend_name(), "identity");
    }

    #[test]
    fn backend_selection_defaults_to_noop() {
        let notifier = Notifier::from_config(&config());
        assert_eq!(notifier.backend_name(), "noop");
    }

    #[test]
    fn identity_needs_both_url_and_key() {
        let notifier = Notifier::from_config(&Config {
            identity_url: Some("https://id.example".to_string()),
            ..config()
        });
        assert_eq!(notifier.backend_name(), "noop");
    }
}
