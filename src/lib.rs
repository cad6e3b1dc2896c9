//! # Chatsift
//!
//! A Rust library for sifting WhatsApp real estate chat exports into tagged,
//! tabular leads.
//!
//! ## Overview
//!
//! Real estate brokers live in group chats: listings, buyer requests, and
//! viewing appointments all arrive as free-form messages. Chatsift parses an
//! exported transcript line by line, extracts the timestamp, sender, and
//! message body, then runs three independent heuristic classifiers over each
//! message:
//!
//! - **Category tags** — rent / sell / buyer / request, by keyword containment
//!   (English and Arabic keyword sets)
//! - **Unit type** — hospital, clinic, school, studio, villa, or a bedroom
//!   count ("3 bedrooms")
//! - **Date mention** — a date referenced inside the message body, distinct
//!   from the chat timestamp
//!
//! The classified rows export to CSV (default), JSON, or JSONL.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "1/2/2024, 5:30 pm - Alice: Looking for rent, 2BR villa";
//!
//!     let parser = ChatParser::new();
//!     let messages = parser.parse_str(transcript)?;
//!
//!     let classifier = Classifier::default();
//!     let rows = classifier.classify_all(messages);
//!
//!     assert_eq!(rows[0].sender(), "Alice");
//!     assert_eq!(rows[0].category_label(), "rent, buyer");
//!     assert_eq!(rows[0].unit_type.to_string(), "villa");
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Keyword Sets
//!
//! The keyword tables are plain configuration data, not globals. Inject your
//! own locale or vocabulary:
//!
//! ```rust
//! use chatsift::classify::{Category, Classifier};
//! use chatsift::config::{CategoryKeywords, ClassifierConfig};
//!
//! let config = ClassifierConfig::new().with_categories(vec![
//!     CategoryKeywords::new(Category::Rent, &["zu vermieten"]),
//!     CategoryKeywords::new(Category::Sell, &["zu verkaufen"]),
//! ]);
//!
//! let classifier = Classifier::new(&config);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — line-format detection and transcript parsing
//!   - [`ChatParser`](parser::ChatParser), [`LineFormat`](parser::LineFormat)
//! - [`timestamp`] — day-first timestamp normalization
//! - [`classify`] — the three heuristic classifiers
//!   - [`Classifier`](classify::Classifier), [`Category`](classify::Category),
//!     [`UnitType`](classify::UnitType)
//! - [`config`] — parser and classifier configuration
//!   - [`ParserConfig`](config::ParserConfig), [`ClassifierConfig`](config::ClassifierConfig)
//! - [`message`] — [`Message`] and [`ClassifiedMessage`]
//! - [`output`] — format writers ([`write_csv`](output::write_csv),
//!   [`write_json`](output::write_json), [`write_jsonl`](output::write_jsonl))
//! - [`format`] — [`OutputFormat`](format::OutputFormat) and dispatch helpers
//! - [`error`] — unified error types ([`ChatsiftError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod timestamp;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::{ClassifiedMessage, Message};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    // Core message types
    pub use crate::{ClassifiedMessage, Message};

    // Error types
    pub use crate::error::{ChatsiftError, Result};

    // Parsing
    pub use crate::parser::{ChatParser, LineFormat};

    // Classification
    pub use crate::classify::{Category, Classifier, UnitType};

    // Configuration
    pub use crate::config::{CategoryKeywords, ClassifierConfig, ParserConfig, PropertyKeywords};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};

    // Format dispatch
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
