//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one row per line) - requires `json-output` feature
//!
//! All writers emit the same columns:
//! `timestamp, sender, message, date_only, category, unit_type, date_mentioned`.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::output::to_csv;
//! use chatsift::prelude::*;
//!
//! let classifier = Classifier::default();
//! let rows = classifier.classify_all(vec![Message::new("Alice", "villa for rent")]);
//!
//! let csv = to_csv(&rows)?;
//! assert!(csv.starts_with("timestamp;sender;message"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Column names shared by all writers.
pub const COLUMNS: [&str; 7] = [
    "timestamp",
    "sender",
    "message",
    "date_only",
    "category",
    "unit_type",
    "date_mentioned",
];
