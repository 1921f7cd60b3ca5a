use crate::interface_adapters::protocol::ErrorResponse;
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

// JSON body extractor for the action endpoints.
//
// An empty body reads as `{}` so the use case reports its own missing-field code.
// Malformed JSON or a bare scalar body becomes 400 `invalid_body`.
pub struct ActionJson<T>(pub T);

impl<S, T> FromRequest<S> for ActionJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| invalid_body(rejection.body_text()))?;

        let parsed = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value::<T>(Value::Object(serde_json::Map::new()))
        } else {
            serde_json::from_slice::<T>(&bytes)
        };

        parsed
            .map(ActionJson)
            .map_err(|err| invalid_body(err.to_string()))
    }
}

fn invalid_body(detail: String) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(%detail, "rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::with_detail("invalid_body", Value::String(detail))),
    )
}
