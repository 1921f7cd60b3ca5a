use serde_json::Value;

use crate::domain::errors::ActionError;
use crate::interface_adapters::protocol::{EmailSendRequest, EmailSendResponse};
use crate::use_cases::{present, present_text};

const MOCK_MESSAGE_ID: &str = "mock-123";

// Mock send: validates the envelope and reports success without dispatching.
pub fn execute(payload: EmailSendRequest) -> Result<EmailSendResponse, ActionError> {
    // `to` may be one address or a list of them.
    let to = present_text(&payload.to).ok_or(ActionError::MissingParams)?;
    present(&payload.subject).ok_or(ActionError::MissingParams)?;
    present(&payload.html).ok_or(ActionError::MissingParams)?;

    let attachments = payload
        .attachments
        .as_ref()
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    tracing::debug!(%to, attachments, "mock email accepted");

    Ok(EmailSendResponse {
        message_id: MOCK_MESSAGE_ID.to_string(),
        status: "sent".to_string(),
    })
}
