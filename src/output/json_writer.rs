//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::message::ClassifiedMessage;

/// Flat row structure matching the tabular column set.
#[derive(Serialize)]
struct JsonRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    sender: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_only: Option<String>,
    category: String,
    unit_type: String,
    date_mentioned: String,
}

impl JsonRow {
    fn from_row(row: &ClassifiedMessage) -> Self {
        Self {
            timestamp: row
                .timestamp()
                .map(|ts| ts.format("%Y-%m-%dT%H:%M:%S").to_string()),
            sender: row.sender().to_string(),
            message: row.content().to_string(),
            date_only: row.date_only().map(|d| d.to_string()),
            category: row.category_label(),
            unit_type: row.unit_type.to_string(),
            date_mentioned: row.date_mentioned_label(),
        }
    }
}

/// Writes classified rows to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Alice", "message": "villa for rent", "category": "rent", ...}
/// ]
/// ```
pub fn write_json(rows: &[ClassifiedMessage], output_path: &str) -> Result<()> {
    let json = to_json(rows)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts classified rows to a pretty-printed JSON string.
pub fn to_json(rows: &[ClassifiedMessage]) -> Result<String> {
    let json_rows: Vec<JsonRow> = rows.iter().map(JsonRow::from_row).collect();
    Ok(serde_json::to_string_pretty(&json_rows)?)
}
