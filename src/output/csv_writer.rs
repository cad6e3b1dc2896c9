//! CSV output writer.

use std::fs::File;

use crate::error::{ChatsiftError, Result};
use crate::message::ClassifiedMessage;
use crate::output::COLUMNS;

/// Writes classified rows to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `timestamp`, `sender`, `message`, `date_only`, `category`,
///   `unit_type`, `date_mentioned`
/// - Encoding: UTF-8
///
/// Null timestamps render as empty cells; a missing date mention renders as
/// `no date`.
pub fn write_csv(rows: &[ClassifiedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record(COLUMNS)?;

    for row in rows {
        writer.write_record(build_record(row))?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts classified rows to a CSV string.
///
/// Same format as [`write_csv`], but returns a `String` instead of writing to
/// a file.
pub fn to_csv(rows: &[ClassifiedMessage]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;

    for row in rows {
        writer.write_record(build_record(row))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatsiftError::invalid_format("CSV", e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Build the CSV record for a single row.
fn build_record(row: &ClassifiedMessage) -> Vec<String> {
    vec![
        row.timestamp()
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        row.sender().to_string(),
        row.content().to_string(),
        row.date_only().map(|d| d.to_string()).unwrap_or_default(),
        row.category_label(),
        row.unit_type.to_string(),
        row.date_mentioned_label(),
    ]
}
