//! Heuristic message classifiers.
//!
//! Three independent classifiers run over each message body:
//! - [`category`] — rent/sell/buyer/request tags by keyword containment
//! - [`unit_type`] — property kind or bedroom count
//! - [`date_mention`] — a date referenced inside the message
//!
//! Each classifier is pure and total: no input errors, no dependence on row
//! order, sentinel results instead of failures. [`Classifier`] bundles all
//! three behind one keyword configuration, compiling the patterns once at
//! construction.
//!
//! # Example
//!
//! ```rust
//! use chatsift::classify::{Classifier, UnitType};
//! use chatsift::Message;
//!
//! let classifier = Classifier::default();
//! let row = classifier.classify(Message::new("Alice", "3 BHK villa for rent"));
//!
//! assert_eq!(row.category_label(), "rent");
//! assert_eq!(row.unit_type, UnitType::Villa);
//! ```

pub mod category;
pub mod date_mention;
pub mod unit_type;

pub use category::{Category, CategoryClassifier};
pub use date_mention::DateMentionExtractor;
pub use unit_type::{UnitType, UnitTypeExtractor};

use crate::config::ClassifierConfig;
use crate::message::{ClassifiedMessage, Message};

/// All three classifiers behind one configuration.
pub struct Classifier {
    categories: CategoryClassifier,
    units: UnitTypeExtractor,
    dates: DateMentionExtractor,
}

impl Classifier {
    /// Creates a classifier from a keyword configuration.
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            categories: CategoryClassifier::new(config),
            units: UnitTypeExtractor::new(config),
            dates: DateMentionExtractor::new(),
        }
    }

    /// Classifies a single message.
    pub fn classify(&self, message: Message) -> ClassifiedMessage {
        let categories = self.categories.classify(&message.content);
        let unit_type = self.units.extract(&message.content);
        let date_mentioned = self.dates.extract(&message.content);

        ClassifiedMessage {
            message,
            categories,
            unit_type,
            date_mentioned,
        }
    }

    /// Classifies a batch of messages, preserving order.
    pub fn classify_all(&self, messages: Vec<Message>) -> Vec<ClassifiedMessage> {
        messages.into_iter().map(|m| self.classify(m)).collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}
