use crate::models::{InvitationNotice, InviteMode};

/// Rendered email parts.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Render the invitation email. Pure: the same notice and URL always
/// produce the same output.
pub fn render_invite_email(notice: &InvitationNotice, invite_url: &str) -> EmailContent {
    let hours = format_hours(notice.hours);
    let activity = activity_phrase(notice);

    let subject = format!("{} invited you to join TimeBank", notice.inviter_name);

    let html = format!(
        r#"<!DOCTYPE html>
<html>
  <body style="margin:0;padding:0;background-color:#f5f5f4;font-family:Arial,Helvetica,sans-serif;">
    <div style="max-width:520px;margin:0 auto;padding:32px 24px;">
      <div style="background-color:#ffffff;border-radius:8px;padding:32px;">
        <h2 style="margin:0 0 16px;color:#1c1917;">You're invited to TimeBank</h2>
        <p style="margin:0 0 16px;color:#44403c;line-height:1.5;">Hi {invitee_name},</p>
        <p style="margin:0 0 16px;color:#44403c;line-height:1.5;">
          {inviter_name} says {activity} for <strong>{hours}</strong> and wants to
          log that time on TimeBank. Accept the invitation to confirm it and
          create your account.
        </p>
        <p style="margin:0 0 24px;">
          <a href="{invite_url}" style="display:inline-block;background-color:#16a34a;color:#ffffff;text-decoration:none;padding:12px 24px;border-radius:6px;font-weight:bold;">Accept invitation</a>
        </p>
        <p style="margin:0 0 8px;color:#78716c;font-size:13px;line-height:1.5;">
          If the button does not work, copy this link into your browser:
        </p>
        <p style="margin:0;font-size:13px;"><a href="{invite_url}" style="color:#16a34a;">{invite_url}</a></p>
      </div>
      <p style="margin:16px 0 0;color:#a8a29e;font-size:12px;text-align:center;">
        If you were not expecting this invitation you can ignore this email.
      </p>
    </div>
  </body>
</html>
"#,
        invitee_name = notice.invitee_name,
        inviter_name = notice.inviter_name,
        activity = activity,
        hours = hours,
        invite_url = invite_url,
    );

    let text = format!(
        "Hi {invitee_name},\n\n\
         {inviter_name} says {activity} for {hours} and wants to log that time \
         on TimeBank.\n\
         Accept the invitation to confirm it and create your account:\n\n\
         {invite_url}\n\n\
         If you were not expecting this invitation you can ignore this email.\n",
        invitee_name = notice.invitee_name,
        inviter_name = notice.inviter_name,
        activity = activity,
        hours = hours,
        invite_url = invite_url,
    );

    EmailContent {
        subject,
        html,
        text,
    }
}

/// "1 hour" / "2 hours"; whole numbers render without a decimal point.
pub fn format_hours(hours: f64) -> String {
    let unit = if hours == 1.0 { "hour" } else { "hours" };

    if hours.fract() == 0.0 {
        format!("{} {}", hours as i64, unit)
    } else {
        format!("{} {}", hours, unit)
    }
}

fn activity_phrase(notice: &InvitationNotice) -> String {
    match notice.mode {
        InviteMode::Helped => format!("they {}", notice.mode.phrase()),
        InviteMode::Received => notice.mode.phrase().to_string(),
    }
}
