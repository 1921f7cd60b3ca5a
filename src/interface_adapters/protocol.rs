use serde::{Deserialize, Serialize};
use serde_json::Value;

// Request fields are untyped JSON values. Presence is checked in the use cases so each
// endpoint can answer with its own error code, and a field of an unexpected type is
// coerced there rather than rejected here.

// Request payload for the Instagram business discovery proxy.
#[derive(Debug, Default, Deserialize)]
pub struct InstagramFetchRequest {
    pub username: Option<Value>,
    // Requested media count; defaults to 10 and is capped by the data source.
    pub limit: Option<Value>,
}

// Request payload for appending rows to an editorial sheet.
#[derive(Debug, Default, Deserialize)]
pub struct SheetAppendRequest {
    pub spreadsheet_id: Option<Value>,
    pub sheet_name: Option<Value>,
    pub rows: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SheetAppendResponse {
    pub updated_range: String,
    pub web_link: String,
}

// Request payload for sending an email.
#[derive(Debug, Default, Deserialize)]
pub struct EmailSendRequest {
    pub to: Option<Value>,
    pub subject: Option<Value>,
    pub html: Option<Value>,
    pub attachments: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EmailSendResponse {
    pub message_id: String,
    pub status: String,
}

// Request payload for a Drive upload.
#[derive(Debug, Default, Deserialize)]
pub struct DriveUploadRequest {
    pub filename: Option<Value>,
    pub mime_type: Option<Value>,
    pub file_base64: Option<Value>,
    pub folder_id: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DriveUploadResponse {
    pub file_id: String,
    #[serde(rename = "webViewLink")]
    pub web_view_link: String,
}

// Request payload for a news search.
#[derive(Debug, Default, Deserialize)]
pub struct NewsSearchRequest {
    pub query: Option<Value>,
    pub from: Option<Value>,
    pub to: Option<Value>,
    pub language: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct NewsSearchResponse {
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub description: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

// Error envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    // Machine-readable error code, e.g. "missing_params".
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(error: impl Into<String>, detail: Value) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail),
        }
    }
}
