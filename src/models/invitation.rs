use serde::{Deserialize, Serialize};

/// Which party performed the tracked activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteMode {
    /// The inviter helped the invitee.
    Helped,
    /// The invitee helped the inviter.
    Received,
}

impl InviteMode {
    /// The literal "helped" selects `Helped`; every other value reads as
    /// `Received`.
    pub fn parse(raw: &str) -> Self {
        if raw == "helped" {
            InviteMode::Helped
        } else {
            InviteMode::Received
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InviteMode::Helped => "helped",
            InviteMode::Received => "received",
        }
    }

    /// Phrase used in the email copy.
    pub fn phrase(&self) -> &'static str {
        match self {
            InviteMode::Helped => "helped you",
            InviteMode::Received => "you helped them",
        }
    }
}

/// Invitation parameters for one notification request. Constructed from a
/// validated request body, consumed to render and dispatch, then discarded.
#[derive(Debug, Clone)]
pub struct InvitationNotice {
    pub invitee_email: String,
    pub invitee_name: String,
    pub inviter_name: String,
    pub hours: f64,
    pub mode: InviteMode,
    /// Opaque token, only ever used as a URL path segment.
    pub invitation_token: String,
}

/// Inbound request body. Every key is optional at the serde layer so the
/// validator can report the full set of missing fields in one pass.
#[derive(Debug, Default, Deserialize)]
pub struct NotifyInviteRequest {
    pub invitee_email: Option<String>,
    pub invitee_name: Option<String>,
    pub inviter_name: Option<String>,
    pub hours: Option<f64>,
    pub mode: Option<String>,
    pub invitation_token: Option<String>,
}

impl NotifyInviteRequest {
    /// Check every required field before any config or network access.
    /// Empty strings and zero hours count as missing.
    pub fn validate(self) -> std::result::Result<InvitationNotice, Vec<&'static str>> {
        let mut missing = Vec::new();

        if is_blank(&self.invitee_email) {
            missing.push("invitee_email");
        }
        if is_blank(&self.invitee_name) {
            missing.push("invitee_name");
        }
        if is_blank(&self.inviter_name) {
            missing.push("inviter_name");
        }
        if self.hours.unwrap_or(0.0) == 0.0 {
            missing.push("hours");
        }
        if is_blank(&self.mode) {
            missing.push("mode");
        }
        if is_blank(&self.invitation_token) {
            missing.push("invitation_token");
        }

        match (
            self.invitee_email,
            self.invitee_name,
            self.inviter_name,
            self.hours,
            self.mode,
            self.invitation_token,
        ) {
            (
                Some(invitee_email),
                Some(invitee_name),
                Some(inviter_name),
                Some(hours),
                Some(mode),
                Some(invitation_token),
            ) if missing.is_empty() => Ok(InvitationNotice {
                invitee_email,
                invitee_name,
                inviter_name,
                hours,
                mode: InviteMode::parse(&mode),
                invitation_token,
            }),
            _ => Err(missing),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Terminal outcome of one dispatch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Sent { message_id: Option<String> },
    SoftFailed { reason: String },
    Skipped { reason: String },
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::Sent { .. } => "sent",
            DeliveryOutcome::SoftFailed { .. } => "soft_failed",
            DeliveryOutcome::Skipped { .. } => "skipped",
        }
    }
}

/// Response for a notify request. Every dispatch outcome answers
/// `success: true`; the invitation itself was created upstream and stays
/// valid whether or not the email went out.
#[derive(Debug, Serialize)]
pub struct NotifyInviteResponse {
    pub success: bool,
    pub invite_url: String,
    pub delivery: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NotifyInviteResponse {
    pub fn from_outcome(invite_url: String, outcome: DeliveryOutcome) -> Self {
        let delivery = outcome.as_str().to_string();

        match outcome {
            DeliveryOutcome::Sent { message_id } => Self {
                success: true,
                invite_url,
                delivery,
                message_id,
                note: None,
            },
            DeliveryOutcome::SoftFailed { reason } | DeliveryOutcome::Skipped { reason } => Self {
                success: true,
                invite_url,
                delivery,
                message_id: None,
                note: Some(reason),
            },
        }
    }
}
