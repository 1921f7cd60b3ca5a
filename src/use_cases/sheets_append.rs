use serde_json::Value;

use crate::domain::errors::ActionError;
use crate::interface_adapters::protocol::{SheetAppendRequest, SheetAppendResponse};
use crate::use_cases::{present, present_text};

// Mock append: reports the range the rows would occupy, nothing is written.
pub fn execute(payload: SheetAppendRequest) -> Result<SheetAppendResponse, ActionError> {
    let spreadsheet_id = present_text(&payload.spreadsheet_id).ok_or(ActionError::MissingParams)?;
    let sheet_name = present_text(&payload.sheet_name).ok_or(ActionError::MissingParams)?;
    // An empty row list still counts as sent.
    let rows = present(&payload.rows).ok_or(ActionError::MissingParams)?;

    Ok(SheetAppendResponse {
        updated_range: format!("{sheet_name}!A1:F{}", row_count(rows)),
        web_link: format!("https://docs.google.com/spreadsheets/d/{spreadsheet_id}"),
    })
}

// A single non-array value is one row.
fn row_count(rows: &Value) -> usize {
    rows.as_array().map_or(1, Vec::len)
}
