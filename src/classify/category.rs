//! Category tagging by keyword containment.
//!
//! A message gets every tag whose keyword set has at least one substring hit
//! against the case-folded text. Tags come out in the keyword set's insertion
//! order; there is no precedence beyond that, and a message may carry several
//! tags at once ("Looking for rent" is both rent and buyer under the
//! reference keywords).

use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;

/// A heuristic lead category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Unit offered for rent.
    Rent,
    /// Unit offered for sale.
    Sell,
    /// Someone looking to buy or rent.
    Buyer,
    /// A request addressed to the group.
    Request,
}

impl Category {
    /// Returns all categories in reference order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Rent,
            Category::Sell,
            Category::Buyer,
            Category::Request,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Rent => write!(f, "rent"),
            Category::Sell => write!(f, "sell"),
            Category::Buyer => write!(f, "buyer"),
            Category::Request => write!(f, "request"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rent" => Ok(Category::Rent),
            "sell" => Ok(Category::Sell),
            "buyer" => Ok(Category::Buyer),
            "request" => Ok(Category::Request),
            _ => Err(format!(
                "Unknown category: '{}'. Expected one of: rent, sell, buyer, request",
                s
            )),
        }
    }
}

/// Keyword-containment classifier for category tags.
///
/// Keywords are case-folded once at construction; Arabic keywords pass
/// through case folding unchanged.
pub struct CategoryClassifier {
    sets: Vec<(Category, Vec<String>)>,
}

impl CategoryClassifier {
    /// Builds the classifier from a keyword configuration.
    pub fn new(config: &ClassifierConfig) -> Self {
        let sets = config
            .categories
            .iter()
            .map(|set| {
                let keywords = set.keywords.iter().map(|k| k.to_lowercase()).collect();
                (set.category, keywords)
            })
            .collect();
        Self { sets }
    }

    /// Returns the matching tags for a message body, in insertion order.
    ///
    /// An empty result means "uncategorized".
    pub fn classify(&self, text: &str) -> Vec<Category> {
        let lower = text.to_lowercase();
        self.sets
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|(category, _)| *category)
            .collect()
    }
}
