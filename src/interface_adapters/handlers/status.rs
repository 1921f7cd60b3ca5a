use crate::interface_adapters::protocol::{ErrorResponse, HealthResponse};
use axum::{Json, http::StatusCode};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "Comms Actions API",
    })
}

// Reached for unknown paths and for known paths called with the wrong method.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not_found")))
}
