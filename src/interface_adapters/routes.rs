use crate::interface_adapters::auth::require_bearer;
use crate::interface_adapters::handlers::actions::{
    append_sheet, search_news, send_email, upload_file,
};
use crate::interface_adapters::handlers::instagram::fetch_instagram;
use crate::interface_adapters::handlers::status::{health, not_found};
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;
use axum::{
    Json, Router,
    handler::Handler,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>) -> Router {
    // Everything behind the bearer gate, the not-found fallback included.
    let protected = Router::new()
        .route(
            "/social/instagram/fetch",
            post(fetch_instagram).fallback(not_found),
        )
        .route(
            "/sheets/editorial/append",
            post(append_sheet).fallback(not_found),
        )
        .route("/email/send", post(send_email).fallback(not_found))
        .route("/drive/upload", post(upload_file).fallback(not_found))
        .route("/news/search", post(search_news).fallback(not_found))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    // Health stays public for GET; any other method there is an unmatched route and goes
    // through the same gate as the protected fallback.
    let gated_not_found =
        not_found.layer(middleware::from_fn_with_state(state.clone(), require_bearer));
    Router::new()
        .route("/", get(health).fallback(gated_not_found.clone()))
        .route("/health", get(health).fallback(gated_not_found))
        .merge(protected)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// A panicking handler answers 500 instead of tearing down the connection task.
fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("internal_error")),
    )
        .into_response()
}
