// Use cases layer: one workflow per action endpoint.

pub mod drive_upload;
pub mod email_send;
pub mod instagram_fetch;
pub mod news_search;
pub mod sheets_append;

#[cfg(test)]
pub(crate) mod test_support;

use serde_json::Value;
use std::borrow::Cow;

// A field counts as present when it was sent and is truthy: not null, `false`, `0` or `""`.
// Arrays and objects are present even when empty.
pub(crate) fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|value| is_truthy(value))
}

// Present field rendered as text, see `text`.
pub(crate) fn present_text(value: &Option<Value>) -> Option<Cow<'_, str>> {
    present(value).map(text)
}

// Strings are used as-is; any other value is rendered as compact JSON.
pub(crate) fn text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
