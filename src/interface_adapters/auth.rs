use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

const BEARER_PREFIX: &str = "Bearer ";

// Bearer gate for every protected route, including the not-found fallback.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if !token_matches(header, state.api_token.as_deref()) {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            header_present = header.is_some(),
            "rejected request without a valid bearer token"
        );
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("unauthorized")),
        )
            .into_response();
    }

    next.run(req).await
}

// Exact byte comparison of the token after "Bearer " against the configured secret.
pub fn token_matches(header: Option<&str>, expected: Option<&str>) -> bool {
    let Some(expected) = expected.filter(|secret| !secret.is_empty()) else {
        return false;
    };

    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .is_some_and(|presented| presented.as_bytes() == expected.as_bytes())
}
