//! JSON Lines (JSONL) output writer.
//!
//! One row per line, convenient for downstream pipelines that stream records.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::error::Result;
use crate::message::ClassifiedMessage;

/// Flat row structure matching the tabular column set.
#[derive(Serialize)]
struct JsonlRow {
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

impl JsonlRow {
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

/// Writes classified rows to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sender":"Alice","message":"villa for rent","category":"rent",...}
/// ```
pub fn write_jsonl(rows: &[ClassifiedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for row in rows {
        let line = serde_json::to_string(&JsonlRow::from_row(row))?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts classified rows to a JSONL string.
pub fn to_jsonl(rows: &[ClassifiedMessage]) -> Result<String> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(&JsonlRow::from_row(row))?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use crate::message::Message;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_jsonl_basic() {
        let classifier = Classifier::default();
        let rows = classifier.classify_all(vec![
            Message::new("Alice", "villa for rent"),
            Message::new("Bob", "hello"),
        ]);

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_jsonl(&rows, path).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let reader = BufReader::new(file);
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();

        assert_eq!(lines.len(), 2);

        let row1: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(row1["sender"], "Alice");
        assert_eq!(row1["unit_type"], "villa");

        let row2: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(row2["category"], "uncategorized");
    }

    #[test]
    fn test_to_jsonl_no_array_brackets() {
        let classifier = Classifier::default();
        let rows = classifier.classify_all(vec![Message::new("Alice", "hello")]);

        let jsonl = to_jsonl(&rows).unwrap();
        assert!(!jsonl.contains('['));
        assert!(jsonl.ends_with('\n'));
    }

    #[test]
    fn test_to_jsonl_empty() {
        assert_eq!(to_jsonl(&[]).unwrap(), "");
    }
}
