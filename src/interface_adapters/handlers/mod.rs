// HTTP handlers; each one runs a single use case and maps its errors.

pub mod actions;
pub mod instagram;
pub mod status;

use crate::domain::errors::ActionError;
use crate::domain::instagram::InstagramError;
use crate::interface_adapters::protocol::ErrorResponse;
use axum::{Json, http::StatusCode};
use serde_json::Value;

pub type HandlerError = (StatusCode, Json<ErrorResponse>);

// Helper to build a JSON error response.
fn error_response(status: StatusCode, code: &str, detail: Option<Value>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            detail,
        }),
    )
}

// Maps domain errors to HTTP status and machine-readable error code.
pub fn map_action_error(err: ActionError) -> HandlerError {
    match err {
        ActionError::MissingUsername => {
            error_response(StatusCode::BAD_REQUEST, "missing_username", None)
        }
        ActionError::InvalidUsername => {
            error_response(StatusCode::BAD_REQUEST, "invalid_username", None)
        }
        ActionError::MissingParams => error_response(StatusCode::BAD_REQUEST, "missing_params", None),
        ActionError::MissingQuery => error_response(StatusCode::BAD_REQUEST, "missing_query", None),
        ActionError::Instagram(InstagramError::CredentialsMissing) => {
            tracing::error!("instagram credentials are not configured.");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "instagram_credentials_missing",
                None,
            )
        }
        ActionError::Instagram(InstagramError::ProfileNotAccessible) => error_response(
            StatusCode::NOT_FOUND,
            "profile_not_accessible_or_no_media",
            None,
        ),
        ActionError::Instagram(InstagramError::Upstream { status, detail }) => {
            // Forward the upstream status when there is one; transport failures become 500.
            let status = status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            tracing::error!(%status, %detail, "graph api call failed.");
            error_response(status, "meta_api_error", Some(detail))
        }
    }
}
