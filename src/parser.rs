//! Chat transcript parser.
//!
//! Exports vary by platform version and device locale. Rather than guessing
//! one format for the whole file, every line is tried against an ordered list
//! of grammars and the first match wins; lines matching nothing are dropped.
//!
//! Supported line grammars, in precedence order:
//! - Dashed: `1/2/2024, 5:30 pm - Sender: Message` (12h or 24h, optional
//!   narrow no-break space before am/pm, `-`/`–`/`—` separators)
//! - Bracketed: `[1/2/2024, 17:30] Sender: Message`

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::timestamp::parse_timestamp;

/// Supported line grammars, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// Dashed separator with optional am/pm.
    /// Example: `1/2/2024, 5:30 pm - Alice: Message`
    Dashed,
    /// Bracketed timestamp, 24-hour time.
    /// Example: `[1/2/2024, 17:30] Alice: Message`
    Bracketed,
}

impl LineFormat {
    /// Returns the regex pattern for this grammar.
    pub fn pattern(self) -> &'static str {
        match self {
            // 1/2/2024, 5:30 pm - Alice: Message
            // Tolerates U+202F before am/pm and en/em dash separators.
            LineFormat::Dashed => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{4})[, ]\s*(\d{1,2}:\d{2}(?::\d{2})?)\s*[\x{202F}\s]?(am|pm)?\s*[-–—]\s*(.*?):\s(.+)$"
            }
            // [1/2/2024, 17:30] Alice: Message
            LineFormat::Bracketed => {
                r"(?i)^\[(\d{1,2}/\d{1,2}/\d{4})[ ,]*(\d{1,2}:\d{2}(?::\d{2})?)\]\s*(.*?):\s(.+)$"
            }
        }
    }

    /// Returns all supported grammars in precedence order.
    pub fn all() -> &'static [LineFormat] {
        &[LineFormat::Dashed, LineFormat::Bracketed]
    }
}

/// A compiled line grammar.
struct LineMatcher {
    format: LineFormat,
    regex: Regex,
}

impl LineMatcher {
    fn new(format: LineFormat) -> Self {
        Self {
            format,
            regex: Regex::new(format.pattern()).unwrap(),
        }
    }

    /// Extracts a message from one trimmed line, or `None` if the grammar
    /// doesn't match.
    fn parse_line(&self, line: &str) -> Option<Message> {
        let caps = self.regex.captures(line)?;

        let (date, time, ampm, sender, content) = match self.format {
            LineFormat::Dashed => (
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
                caps.get(3).map(|m| m.as_str()),
                caps.get(4).map_or("", |m| m.as_str()),
                caps.get(5).map_or("", |m| m.as_str()),
            ),
            LineFormat::Bracketed => (
                caps.get(1).map_or("", |m| m.as_str()),
                caps.get(2).map_or("", |m| m.as_str()),
                None,
                caps.get(3).map_or("", |m| m.as_str()),
                caps.get(4).map_or("", |m| m.as_str()),
            ),
        };

        let mut msg = Message::new(sender.trim(), content.trim());
        msg.timestamp = parse_timestamp(date, time, ampm);
        Some(msg)
    }
}

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust
/// use chatsift::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let messages = parser
///     .parse_str("1/2/2024, 5:30 pm - Alice: Villa for rent\njunk line")?;
///
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].sender(), "Alice");
/// # Ok::<(), chatsift::ChatsiftError>(())
/// ```
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript file.
    ///
    /// The file is decoded leniently: invalid bytes are dropped, never
    /// surfaced as an error.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes)
    }

    /// Parses raw transcript bytes with lenient decoding.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Message>> {
        let text = decode_lossy(bytes);
        self.parse_str(&text)
    }

    /// Parses transcript content from a string.
    ///
    /// Zero matching lines is not an error; the result is simply empty.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        let text: Cow<'_, str> = if self.config.normalize_whitespace {
            Cow::Owned(normalize_whitespace(content))
        } else {
            Cow::Borrowed(content)
        };

        let matchers: Vec<LineMatcher> = LineFormat::all()
            .iter()
            .map(|fmt| LineMatcher::new(*fmt))
            .collect();

        let mut messages = Vec::new();

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            // First matching grammar wins; the rest of the list is skipped.
            if let Some(msg) = matchers.iter().find_map(|m| m.parse_line(line)) {
                if self.config.strict_timestamps && msg.timestamp.is_none() {
                    continue;
                }
                messages.push(msg);
            }
        }

        Ok(messages)
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes bytes as UTF-8, dropping invalid sequences.
fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('\u{FFFD}', "")
}

/// Normalizes the whitespace damage common in re-shared exports: the `â€¯`
/// mojibake sequence (U+202F read as Latin-1) and literal U+202F become plain
/// spaces, and double spaces collapse.
fn normalize_whitespace(text: &str) -> String {
    text.replace("â€¯", " ")
        .replace('\u{202F}', " ")
        .replace("  ", " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_dashed_line_12h() {
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("1/2/2024, 5:30 pm - Alice: Looking for rent, 2BR villa")
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender(), "Alice");
        assert_eq!(messages[0].content(), "Looking for rent, 2BR villa");

        let ts = messages[0].timestamp().unwrap();
        assert_eq!((ts.day(), ts.month(), ts.year()), (1, 2, 2024));
        assert_eq!(ts.hour(), 17);
    }

    #[test]
    fn test_dashed_line_24h() {
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("15/6/2024, 20:40 - Omar: Studio available for rent")
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].timestamp().unwrap().hour(), 20);
    }

    #[test]
    fn test_bracketed_line() {
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("[1/2/2024, 17:30] Alice: Villa for sale")
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender(), "Alice");
        assert_eq!(messages[0].timestamp().unwrap().hour(), 17);
    }

    #[test]
    fn test_bracketed_with_seconds() {
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("[1/2/2024, 17:30:45] Alice: Hello")
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].timestamp().unwrap().second(), 45);
    }

    #[test]
    fn test_narrow_no_break_space_before_ampm() {
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("1/2/2024, 5:30\u{202F}pm - Alice: hello")
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].timestamp().unwrap().hour(), 17);
    }

    #[test]
    fn test_mojibake_ampm_separator() {
        // U+202F re-encoded as Latin-1 shows up as "â€¯" in the raw text
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("1/2/2024, 5:30â€¯pm - Alice: hello")
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].timestamp().unwrap().hour(), 17);
    }

    #[test]
    fn test_en_dash_and_em_dash_separators() {
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("1/2/2024, 5:30 pm – Alice: one\n1/2/2024, 5:31 pm — Bob: two")
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender(), "Alice");
        assert_eq!(messages[1].sender(), "Bob");
    }

    #[test]
    fn test_non_matching_lines_dropped() {
        let parser = ChatParser::new();
        let content = "junk line\n\
                       1/2/2024, 5:30 pm - Alice: kept\n\
                       another junk line\n\
                       continuation of a previous message\n\
                       [1/2/2024, 17:31] Bob: also kept";
        let messages = parser.parse_str(content).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender(), "Alice");
        assert_eq!(messages[1].sender(), "Bob");
    }

    #[test]
    fn test_unparseable_timestamp_keeps_row() {
        // 99 can't be a day or a month, but the line grammar still matches
        let parser = ChatParser::new();
        let messages = parser.parse_str("99/99/2024, 10:30 - Alice: hello").unwrap();

        assert_eq!(messages.len(), 1);
        assert!(messages[0].timestamp().is_none());
    }

    #[test]
    fn test_strict_timestamps_drops_row() {
        let config = ParserConfig::new().with_strict_timestamps(true);
        let parser = ChatParser::with_config(config);
        let messages = parser.parse_str("99/99/2024, 10:30 - Alice: hello").unwrap();

        assert!(messages.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let parser = ChatParser::new();
        assert!(parser.parse_str("").unwrap().is_empty());
        assert!(parser.parse_str("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_sender_with_colon_in_message() {
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("1/2/2024, 5:30 pm - Alice: note: call me")
            .unwrap();

        assert_eq!(messages[0].sender(), "Alice");
        assert_eq!(messages[0].content(), "note: call me");
    }

    #[test]
    fn test_arabic_sender_and_content() {
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("1/2/2024, 5:30 pm - محمد: فيلا للبيع")
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender(), "محمد");
        assert_eq!(messages[0].content(), "فيلا للبيع");
    }

    #[test]
    fn test_parse_bytes_drops_invalid_utf8() {
        let parser = ChatParser::new();
        let mut bytes = b"1/2/2024, 5:30 pm - Alice: hello".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        let messages = parser.parse_bytes(&bytes).unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "hello");
    }

    #[test]
    fn test_two_digit_year_not_matched() {
        // Line grammars require 4-digit years
        let parser = ChatParser::new();
        let messages = parser.parse_str("1/2/24, 5:30 pm - Alice: hello").unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_dashed_takes_precedence() {
        // A line only the bracketed grammar can match still parses, but a
        // dashed line never reaches the bracketed matcher.
        let parser = ChatParser::new();
        let messages = parser
            .parse_str("1/2/2024 5:30 pm - Alice: dashed wins")
            .unwrap();
        assert_eq!(messages.len(), 1);
    }
}
