//! Configuration types for the parser and classifiers.
//!
//! The keyword tables that drive classification are plain immutable data
//! passed into [`Classifier::new`](crate::classify::Classifier::new), so
//! alternative locales or vocabularies can be injected without touching any
//! global state.
//!
//! # Example
//!
//! ```rust
//! use chatsift::classify::Category;
//! use chatsift::config::{CategoryKeywords, ClassifierConfig};
//!
//! let config = ClassifierConfig::new().with_categories(vec![
//!     CategoryKeywords::new(Category::Rent, &["zu vermieten"]),
//! ]);
//! ```

use crate::classify::{Category, UnitType};

// ============================================================================
// Reference keyword sets
// ============================================================================

const RENT_KEYWORDS: &[&str] = &[
    "for rent",
    "looking for rent",
    "available for rent",
    "rent price",
    "للإيجار",
];

const SELL_KEYWORDS: &[&str] = &[
    "for sale",
    "available for sale",
    "sale price",
    "selling price",
    "للبيع",
];

const BUYER_KEYWORDS: &[&str] = &[
    "looking for",
    "need",
    "want to buy",
    "client ready",
    "cash buyer",
    "ready to sign",
    "looking for hot deal",
    "looking hot deal",
    "مشتري",
];

const REQUEST_KEYWORDS: &[&str] = &[
    "anyone have",
    "does anyone",
    "please pm",
    "dm me",
    "kindly dm",
    "share with me",
    "حد عنده",
];

const HOSPITAL_KEYWORDS: &[&str] = &["hospital", "مستشفى"];
const CLINIC_KEYWORDS: &[&str] = &["clinic", "عيادة"];
const SCHOOL_KEYWORDS: &[&str] = &["school", "مدرسة"];
const STUDIO_KEYWORDS: &[&str] = &["studio", "استوديو"];
const VILLA_KEYWORDS: &[&str] = &["villa", "فيلا"];

// ============================================================================
// Parser configuration
// ============================================================================

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatsift::config::ParserConfig;
///
/// let config = ParserConfig::new().with_strict_timestamps(true);
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Normalize stray whitespace before matching: the `â€¯` mojibake
    /// sequence and U+202F become plain spaces, double spaces collapse
    /// (default: true).
    pub normalize_whitespace: bool,

    /// Drop rows whose matched date/time fragment fails to parse, instead of
    /// keeping them with a null timestamp (default: false).
    pub strict_timestamps: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            normalize_whitespace: true,
            strict_timestamps: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables whitespace normalization.
    #[must_use]
    pub fn with_normalize_whitespace(mut self, enabled: bool) -> Self {
        self.normalize_whitespace = enabled;
        self
    }

    /// Sets whether rows with unparseable timestamps are dropped.
    #[must_use]
    pub fn with_strict_timestamps(mut self, strict: bool) -> Self {
        self.strict_timestamps = strict;
        self
    }
}

// ============================================================================
// Classifier configuration
// ============================================================================

/// One category tag and the keywords that trigger it.
#[derive(Debug, Clone)]
pub struct CategoryKeywords {
    /// The tag assigned when any keyword matches.
    pub category: Category,

    /// Substrings tested against the case-folded message.
    pub keywords: Vec<String>,
}

impl CategoryKeywords {
    /// Creates a keyword set for a category.
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// One property unit type and the keywords that trigger it.
#[derive(Debug, Clone)]
pub struct PropertyKeywords {
    /// The unit type assigned when any keyword matches.
    pub unit: UnitType,

    /// Substrings tested against the case-folded message.
    pub keywords: Vec<String>,
}

impl PropertyKeywords {
    /// Creates a keyword set for a property unit type.
    pub fn new(unit: UnitType, keywords: &[&str]) -> Self {
        Self {
            unit,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Configuration for the three classifiers.
///
/// Defaults carry the reference keyword sets (English + Arabic). The category
/// list order defines tag output order; the property list order defines the
/// unit-type cascade, which always takes precedence over bedroom-count
/// detection.
///
/// # Example
///
/// ```rust
/// use chatsift::config::ClassifierConfig;
///
/// let config = ClassifierConfig::new().with_max_bedrooms(8);
/// assert_eq!(config.max_bedrooms, 8);
/// ```
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Ordered category keyword sets.
    pub categories: Vec<CategoryKeywords>,

    /// Ordered property-type keyword cascade.
    pub property_types: Vec<PropertyKeywords>,

    /// Highest bedroom count recognized by the count patterns (default: 5).
    pub max_bedrooms: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryKeywords::new(Category::Rent, RENT_KEYWORDS),
                CategoryKeywords::new(Category::Sell, SELL_KEYWORDS),
                CategoryKeywords::new(Category::Buyer, BUYER_KEYWORDS),
                CategoryKeywords::new(Category::Request, REQUEST_KEYWORDS),
            ],
            property_types: vec![
                PropertyKeywords::new(UnitType::Hospital, HOSPITAL_KEYWORDS),
                PropertyKeywords::new(UnitType::Clinic, CLINIC_KEYWORDS),
                PropertyKeywords::new(UnitType::School, SCHOOL_KEYWORDS),
                PropertyKeywords::new(UnitType::Studio, STUDIO_KEYWORDS),
                PropertyKeywords::new(UnitType::Villa, VILLA_KEYWORDS),
            ],
            max_bedrooms: 5,
        }
    }
}

impl ClassifierConfig {
    /// Creates a new configuration with the reference keyword sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the category keyword sets.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<CategoryKeywords>) -> Self {
        self.categories = categories;
        self
    }

    /// Replaces the property-type keyword cascade.
    #[must_use]
    pub fn with_property_types(mut self, property_types: Vec<PropertyKeywords>) -> Self {
        self.property_types = property_types;
        self
    }

    /// Sets the highest recognized bedroom count (clamped to 1..=9).
    #[must_use]
    pub fn with_max_bedrooms(mut self, max: u8) -> Self {
        self.max_bedrooms = max.clamp(1, 9);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert!(config.normalize_whitespace);
        assert!(!config.strict_timestamps);
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_normalize_whitespace(false)
            .with_strict_timestamps(true);
        assert!(!config.normalize_whitespace);
        assert!(config.strict_timestamps);
    }

    #[test]
    fn test_classifier_config_default_order() {
        let config = ClassifierConfig::default();
        let order: Vec<Category> = config.categories.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Rent,
                Category::Sell,
                Category::Buyer,
                Category::Request
            ]
        );
        assert_eq!(config.property_types.len(), 5);
        assert_eq!(config.property_types[0].unit, UnitType::Hospital);
        assert_eq!(config.property_types[4].unit, UnitType::Villa);
        assert_eq!(config.max_bedrooms, 5);
    }

    #[test]
    fn test_classifier_config_includes_arabic_keywords() {
        let config = ClassifierConfig::default();
        let rent = &config.categories[0];
        assert!(rent.keywords.iter().any(|k| k == "للإيجار"));
        let villa = &config.property_types[4];
        assert!(villa.keywords.iter().any(|k| k == "فيلا"));
    }

    #[test]
    fn test_with_categories_replaces() {
        let config = ClassifierConfig::new()
            .with_categories(vec![CategoryKeywords::new(Category::Rent, &["zu vermieten"])]);
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories[0].keywords, vec!["zu vermieten"]);
    }

    #[test]
    fn test_max_bedrooms_clamped() {
        assert_eq!(ClassifierConfig::new().with_max_bedrooms(0).max_bedrooms, 1);
        assert_eq!(
            ClassifierConfig::new().with_max_bedrooms(42).max_bedrooms,
            9
        );
    }
}
