pub mod health;
pub mod invites;

use std::any::Any;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::config::ErrorPolicy;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    let error_policy = state.config.error_policy;

    Router::new()
        .nest("/api/v1", api_routes())
        .merge(health::health_routes())
        .layer(cors_layer())
        .layer(CatchPanicLayer::custom(move |err: Box<dyn Any + Send + 'static>| {
            panic_response(error_policy, err)
        }))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new().nest("/invitations", invites::invite_routes())
}

/// Permissive CORS for browser clients: the invitation UI calls this
/// service cross-origin with its auth headers attached.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

/// Outermost error boundary. A panicking handler must still answer the
/// caller; the configured policy decides whether that answer is a lenient
/// 200 with error details or a plain 500.
fn panic_response(policy: ErrorPolicy, err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(error = %detail, "Request handler panicked");

    let status = match policy {
        ErrorPolicy::Lenient => StatusCode::OK,
        ErrorPolicy::Strict => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(json!({
            "success": false,
            "error": format!("Internal error: {}", detail),
        })),
    )
        .into_response()
}
