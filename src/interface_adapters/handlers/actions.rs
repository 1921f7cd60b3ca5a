use crate::interface_adapters::body::ActionJson;
use crate::interface_adapters::handlers::{HandlerError, map_action_error};
use crate::interface_adapters::protocol::{
    DriveUploadRequest, DriveUploadResponse, EmailSendRequest, EmailSendResponse,
    NewsSearchRequest, NewsSearchResponse, SheetAppendRequest, SheetAppendResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::news_search::NewsSearchUseCase;
use crate::use_cases::{drive_upload, email_send, sheets_append};
use axum::{Json, extract::State};
use std::sync::Arc;

// Mock endpoints: no external system is touched until real integrations land.

#[tracing::instrument(name = "sheets_append", skip_all, fields(sheet = ?body.sheet_name))]
pub async fn append_sheet(
    ActionJson(body): ActionJson<SheetAppendRequest>,
) -> Result<Json<SheetAppendResponse>, HandlerError> {
    let response = sheets_append::execute(body).map_err(map_action_error)?;
    tracing::info!(range = %response.updated_range, "sheet append accepted.");
    Ok(Json(response))
}

#[tracing::instrument(name = "email_send", skip_all)]
pub async fn send_email(
    ActionJson(body): ActionJson<EmailSendRequest>,
) -> Result<Json<EmailSendResponse>, HandlerError> {
    let response = email_send::execute(body).map_err(map_action_error)?;
    tracing::info!(message_id = %response.message_id, "email accepted.");
    Ok(Json(response))
}

#[tracing::instrument(name = "drive_upload", skip_all, fields(filename = ?body.filename))]
pub async fn upload_file(
    ActionJson(body): ActionJson<DriveUploadRequest>,
) -> Result<Json<DriveUploadResponse>, HandlerError> {
    let response = drive_upload::execute(body).map_err(map_action_error)?;
    tracing::info!(file_id = %response.file_id, "upload accepted.");
    Ok(Json(response))
}

#[tracing::instrument(name = "news_search", skip_all, fields(query = ?body.query))]
pub async fn search_news(
    State(state): State<Arc<AppState>>,
    ActionJson(body): ActionJson<NewsSearchRequest>,
) -> Result<Json<NewsSearchResponse>, HandlerError> {
    let use_case = NewsSearchUseCase {
        clock: state.clock.clone(),
    };

    let response = use_case.execute(body).map_err(map_action_error)?;
    tracing::info!(articles = response.articles.len(), "news search answered.");
    Ok(Json(response))
}
