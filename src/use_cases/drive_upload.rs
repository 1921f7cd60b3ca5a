use crate::domain::errors::ActionError;
use crate::interface_adapters::protocol::{DriveUploadRequest, DriveUploadResponse};
use crate::use_cases::{present, present_text};

const MOCK_FILE_ID: &str = "mock-file-id";

// Mock upload: nothing is stored, a fixed file id and view link come back.
pub fn execute(payload: DriveUploadRequest) -> Result<DriveUploadResponse, ActionError> {
    let filename = present_text(&payload.filename).ok_or(ActionError::MissingParams)?;
    let mime_type = present_text(&payload.mime_type).ok_or(ActionError::MissingParams)?;
    present(&payload.file_base64).ok_or(ActionError::MissingParams)?;

    tracing::debug!(
        %filename,
        %mime_type,
        folder_id = ?payload.folder_id,
        "mock upload accepted"
    );

    Ok(DriveUploadResponse {
        file_id: MOCK_FILE_ID.to_string(),
        web_view_link: format!("https://drive.google.com/file/d/{MOCK_FILE_ID}/view"),
    })
}
