use std::env;

/// Default invite-link base used in local development when SITE_URL is unset.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Policy for answering requests that hit an unexpected internal failure.
///
/// `Lenient` answers 200 with error details so the caller's invitation flow
/// keeps going; `Strict` surfaces a 500 instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    Lenient,
    Strict,
}

impl ErrorPolicy {
    /// Anything other than the literal "strict" reads as lenient.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("strict") {
            ErrorPolicy::Strict
        } else {
            ErrorPolicy::Lenient
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub site_url: Option<String>,
    pub resend_api_key: Option<String>,
    pub mail_from: String,
    pub identity_url: Option<String>,
    pub identity_service_key: Option<String>,
    pub error_policy: ErrorPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            site_url: env::var("SITE_URL").ok().filter(|s| !s.is_empty()),
            resend_api_key: env::var("RESEND_API_KEY").ok().filter(|s| !s.is_empty()),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "TimeBank <invites@timebank.app>".to_string()),
            identity_url: env::var("IDENTITY_URL").ok().filter(|s| !s.is_empty()),
            identity_service_key: env::var("IDENTITY_SERVICE_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            error_policy: ErrorPolicy::parse(&env::var("ERROR_POLICY").unwrap_or_default()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn site_url_or_default(&self) -> &str {
        self.site_url.as_deref().unwrap_or(DEFAULT_SITE_URL)
    }

    /// Invite link for a token: `<site>/invite/<token>`. Depends on nothing
    /// but the configured site URL and the token itself.
    pub fn invite_url(&self, token: &str) -> String {
        if self.site_url.is_none() {
            tracing::warn!(
                fallback = DEFAULT_SITE_URL,
                "SITE_URL not set, using local default for invite link"
            );
        }

        format!(
            "{}/invite/{}",
            self.site_url_or_default().trim_end_matches('/'),
            token
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config_with_site(site_url: Option<&str>) -> Config {
        Config {
            server_host: "localhost".to_string(),
            server_port: 8080,
            site_url: site_url.map(str::to_string),
            resend_api_key: None,
            mail_from: "TimeBank <invites@timebank.app>".to_string(),
            identity_url: None,
            identity_service_key: None,
            error_policy: ErrorPolicy::Lenient,
        }
    }

    #[test]
    fn invite_url_uses_configured_site() {
        let config = config_with_site(Some("https://app.example"));
        assert_eq!(
            config.invite_url("tok123"),
            "https://app.example/invite/tok123"
        );
    }

    #[test]
    fn invite_url_trims_trailing_slash() {
        let config = config_with_site(Some("https://app.example/"));
        assert_eq!(
            config.invite_url("tok123"),
            "https://app.example/invite/tok123"
        );
    }

    #[test]
    fn invite_url_falls_back_to_local_default() {
        let config = config_with_site(None);
        assert_eq!(
            config.invite_url("tok123"),
            "http://localhost:3000/invite/tok123"
        );
    }

    #[test]
    fn error_policy_defaults_to_lenient() {
        assert_eq!(ErrorPolicy::parse(""), ErrorPolicy::Lenient);
        assert_eq!(ErrorPolicy::parse("relaxed"), ErrorPolicy::Lenient);
        assert_eq!(ErrorPolicy::parse("strict"), ErrorPolicy::Strict);
        assert_eq!(ErrorPolicy::parse("STRICT"), ErrorPolicy::Strict);
    }
}
