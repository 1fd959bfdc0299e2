use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::{NotifyInviteRequest, NotifyInviteResponse};
use crate::render::render_invite_email;
use crate::state::AppState;

/// Invitation routes
pub fn invite_routes() -> Router<AppState> {
    Router::new().route("/notify", post(notify_invite))
}

/// POST /api/v1/invitations/notify
///
/// Best-effort email notification for an invitation created upstream. All
/// three dispatch outcomes (sent, soft-failed, skipped) answer 200: the
/// invite link stays usable even when no email reached the recipient. Only
/// a bad body gets a 400.
async fn notify_invite(
    State(state): State<AppState>,
    payload: Result<Json<NotifyInviteRequest>, JsonRejection>,
) -> Result<Json<NotifyInviteResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    })?;

    // Field check runs before any config or network access.
    let notice = request.validate().map_err(AppError::MissingFields)?;

    let invite_url = state.config.invite_url(&notice.invitation_token);
    let email = render_invite_email(&notice, &invite_url);

    let outcome = state.notifier.dispatch(&notice, &email, &invite_url).await;

    Ok(Json(NotifyInviteResponse::from_outcome(invite_url, outcome)))
}
