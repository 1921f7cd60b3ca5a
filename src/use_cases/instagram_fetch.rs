use serde_json::Value;

use crate::domain::errors::ActionError;
use crate::domain::instagram::{InstagramSource, ProfileFeed};
use crate::interface_adapters::protocol::InstagramFetchRequest;
use crate::use_cases::present_text;

// Media count requested when the caller does not send a numeric `limit`.
pub const DEFAULT_MEDIA_LIMIT: u32 = 10;

// Instagram fetch use case with the data source injected (live or mock).
pub struct InstagramFetchUseCase<S> {
    pub source: S,
}

impl<S> InstagramFetchUseCase<S>
where
    S: InstagramSource,
{
    pub async fn execute(&self, payload: InstagramFetchRequest) -> Result<ProfileFeed, ActionError> {
        let username = present_text(&payload.username).ok_or(ActionError::MissingUsername)?;
        // The name is spliced into the Graph field selection, so nothing but handle
        // characters may reach the source.
        if !is_valid_username(&username) {
            return Err(ActionError::InvalidUsername);
        }
        let limit = media_limit(payload.limit.as_ref());

        let feed = self.source.fetch_profile(&username, limit).await?;
        Ok(feed)
    }
}

fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

// Numbers and numeric strings are truncated toward zero and floored at 0. Anything else
// falls back to the default.
fn media_limit(value: Option<&Value>) -> u32 {
    let requested = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match requested {
        Some(limit) if limit.is_finite() => limit.max(0.0) as u32,
        _ => DEFAULT_MEDIA_LIMIT,
    }
}
