use crate::domain::instagram::ProfileFeed;
use crate::interface_adapters::body::ActionJson;
use crate::interface_adapters::handlers::{HandlerError, map_action_error};
use crate::interface_adapters::protocol::InstagramFetchRequest;
use crate::interface_adapters::state::AppState;
use crate::use_cases::instagram_fetch::InstagramFetchUseCase;
use axum::{Json, extract::State};
use std::sync::Arc;

#[tracing::instrument(
    name = "instagram_fetch",
    skip_all,
    fields(username = ?body.username, limit = ?body.limit)
)]
pub async fn fetch_instagram(
    State(state): State<Arc<AppState>>,
    ActionJson(body): ActionJson<InstagramFetchRequest>,
) -> Result<Json<ProfileFeed>, HandlerError> {
    let use_case = InstagramFetchUseCase {
        source: state.instagram.clone(),
    };

    let feed = use_case.execute(body).await.map_err(map_action_error)?;

    tracing::info!(posts = feed.posts.len(), "instagram profile fetched.");
    Ok(Json(feed))
}
