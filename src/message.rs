//! Message types for parsed and classified chat lines.
//!
//! This module provides [`Message`], the normalized representation of one chat
//! export line, and [`ClassifiedMessage`], a message enriched with the three
//! classifier results.
//!
//! # Overview
//!
//! A message consists of:
//! - **Required**: `sender` and `content`
//! - **Optional**: `timestamp` (kept as `None` when the matched date/time
//!   fragment could not be parsed)
//!
//! Timestamps are naive: chat exports carry no timezone information and none
//! is invented.
//!
//! # Examples
//!
//! ```
//! use chatsift::Message;
//!
//! let msg = Message::new("Alice", "Villa for rent in the marina");
//! assert_eq!(msg.sender(), "Alice");
//! assert!(msg.timestamp().is_none());
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::classify::{Category, UnitType};

/// A normalized chat message extracted from one transcript line.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name of the message author |
/// | `content` | `String` | Text content of the message |
/// | `timestamp` | `Option<NaiveDateTime>` | When the message was sent |
///
/// # Construction
///
/// Use [`Message::new`] for simple messages or the builder for timestamps:
///
/// ```
/// use chatsift::Message;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
///     .unwrap()
///     .and_hms_opt(17, 30, 0)
///     .unwrap();
///
/// let msg = Message::new("Alice", "2BR available").with_timestamp(ts);
/// assert!(msg.timestamp().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    pub content: String,

    /// When the message was sent, if the date/time fragment parsed.
    ///
    /// Naive (no timezone): exports don't carry offsets.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

impl Message {
    /// Creates a new message with only sender and content.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::Message;
    ///
    /// let msg = Message::new("Alice", "Anyone have a studio?");
    /// assert_eq!(msg.sender(), "Alice");
    /// assert!(msg.timestamp().is_none());
    /// ```
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp: None,
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp, if available.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the date part of the timestamp, if available.
    pub fn date_only(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// A message plus its classification results.
///
/// Produced by [`Classifier::classify`](crate::classify::Classifier::classify).
/// The classification fields follow sentinel rendering rules rather than
/// erroring:
///
/// - `categories` renders as a comma-joined list in insertion order, or
///   `"uncategorized"` when empty
/// - `date_mentioned` renders as an ISO date or `"no date"`
///
/// ```
/// use chatsift::prelude::*;
///
/// let classifier = Classifier::default();
/// let row = classifier.classify(Message::new("Bob", "hello"));
///
/// assert_eq!(row.category_label(), "uncategorized");
/// assert_eq!(row.unit_type, UnitType::Unknown);
/// assert_eq!(row.date_mentioned_label(), "no date");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedMessage {
    /// The underlying parsed message.
    #[serde(flatten)]
    pub message: Message,

    /// Matching category tags, in the keyword set's insertion order.
    pub categories: Vec<Category>,

    /// The referenced property unit type.
    pub unit_type: UnitType,

    /// A date referenced inside the message body, distinct from the chat
    /// timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_mentioned: Option<NaiveDate>,
}

impl ClassifiedMessage {
    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.message.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.message.content
    }

    /// Returns the chat timestamp, if available.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.message.timestamp
    }

    /// Returns the date part of the chat timestamp, if available.
    pub fn date_only(&self) -> Option<NaiveDate> {
        self.message.date_only()
    }

    /// Renders the category tags as a comma-joined label.
    ///
    /// Tags appear in the keyword set's insertion order; a message with no
    /// matching category renders as `"uncategorized"`.
    pub fn category_label(&self) -> String {
        if self.categories.is_empty() {
            "uncategorized".to_string()
        } else {
            self.categories
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Renders the mentioned date as an ISO date, or `"no date"`.
    pub fn date_mentioned_label(&self) -> String {
        self.date_mentioned
            .map_or_else(|| "no date".to_string(), |d| d.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new("Alice", "Hello");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.content(), "Hello");
        assert!(msg.timestamp().is_none());
        assert!(msg.date_only().is_none());
    }

    #[test]
    fn test_message_builder() {
        let msg = Message::new("Alice", "Hello").with_timestamp(ts(2024, 2, 1, 17, 30));
        assert_eq!(msg.timestamp(), Some(ts(2024, 2, 1, 17, 30)));
        assert_eq!(
            msg.date_only(),
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
    }

    #[test]
    fn test_message_is_empty() {
        assert!(Message::new("Alice", "").is_empty());
        assert!(Message::new("Alice", "   ").is_empty());
        assert!(!Message::new("Alice", "Hello").is_empty());
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new("Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("Alice"));
        // timestamp should be skipped (None)
        assert!(!json.contains("timestamp"));
    }

    #[test]
    fn test_message_deserialization() {
        let json = r#"{"sender":"Bob","content":"Hi"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender(), "Bob");
        assert_eq!(msg.content(), "Hi");
        assert!(msg.timestamp().is_none());
    }

    #[test]
    fn test_category_label_joins_in_order() {
        let row = ClassifiedMessage {
            message: Message::new("Alice", "Looking for rent"),
            categories: vec![Category::Rent, Category::Buyer],
            unit_type: UnitType::Unknown,
            date_mentioned: None,
        };
        assert_eq!(row.category_label(), "rent, buyer");
    }

    #[test]
    fn test_category_label_uncategorized() {
        let row = ClassifiedMessage {
            message: Message::new("Alice", "hello"),
            categories: vec![],
            unit_type: UnitType::Unknown,
            date_mentioned: None,
        };
        assert_eq!(row.category_label(), "uncategorized");
    }

    #[test]
    fn test_date_mentioned_label() {
        let row = ClassifiedMessage {
            message: Message::new("Alice", "viewing on 12/5/2025"),
            categories: vec![],
            unit_type: UnitType::Unknown,
            date_mentioned: NaiveDate::from_ymd_opt(2025, 5, 12),
        };
        assert_eq!(row.date_mentioned_label(), "2025-05-12");

        let row = ClassifiedMessage {
            date_mentioned: None,
            ..row
        };
        assert_eq!(row.date_mentioned_label(), "no date");
    }

    #[test]
    fn test_classified_message_accessors() {
        let row = ClassifiedMessage {
            message: Message::new("Alice", "2BR villa").with_timestamp(ts(2024, 2, 1, 17, 30)),
            categories: vec![Category::Rent],
            unit_type: UnitType::Villa,
            date_mentioned: None,
        };
        assert_eq!(row.sender(), "Alice");
        assert_eq!(row.content(), "2BR villa");
        assert_eq!(row.timestamp(), Some(ts(2024, 2, 1, 17, 30)));
        assert_eq!(
            row.date_only(),
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
    }
}
