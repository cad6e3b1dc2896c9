//! Property unit-type extraction.
//!
//! An ordered cascade: property keywords (hospital, clinic, school, studio,
//! villa) are checked first and short-circuit, then bedroom-count patterns.
//! "2BR villa" is a villa, not "2 bedrooms".
//!
//! Bedroom counts are recognized as digits (`3 BHK`, `2br`), spelled-out
//! English words (`two bedroom`), Arabic digit + غرف forms, and the common
//! Arabic word forms (غرفتين, ثلاث غرف, ...).

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::config::ClassifierConfig;

/// The kind of real-estate unit referenced in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Hospital,
    Clinic,
    School,
    Studio,
    Villa,
    /// A residential unit identified by bedroom count.
    Bedrooms(u8),
    /// No unit reference recognized.
    Unknown,
}

impl UnitType {
    /// Returns `true` unless the unit type is [`Unknown`](UnitType::Unknown).
    pub fn is_known(&self) -> bool {
        !matches!(self, UnitType::Unknown)
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitType::Hospital => write!(f, "hospital"),
            UnitType::Clinic => write!(f, "clinic"),
            UnitType::School => write!(f, "school"),
            UnitType::Studio => write!(f, "studio"),
            UnitType::Villa => write!(f, "villa"),
            UnitType::Bedrooms(n) => write!(f, "{n} bedrooms"),
            UnitType::Unknown => write!(f, "unknown"),
        }
    }
}

impl Serialize for UnitType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const NUMBER_WORDS: &[(&str, u8)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
];

// Common Arabic room phrasings, checked by containment.
const ARABIC_ROOM_PHRASES: &[(&str, u8)] = &[
    ("غرفة واحدة", 1),
    ("غرفتين", 2),
    ("ثلاث غرف", 3),
    ("أربع غرف", 4),
    ("خمس غرف", 5),
];

/// Ordered-cascade extractor for unit types.
pub struct UnitTypeExtractor {
    property: Vec<(UnitType, Vec<String>)>,
    digit_bedrooms: Regex,
    word_bedrooms: Regex,
    arabic_rooms: Regex,
    max_bedrooms: u8,
}

impl UnitTypeExtractor {
    /// Builds the extractor from a keyword configuration.
    pub fn new(config: &ClassifierConfig) -> Self {
        let property = config
            .property_types
            .iter()
            .map(|set| {
                let keywords = set.keywords.iter().map(|k| k.to_lowercase()).collect();
                (set.unit, keywords)
            })
            .collect();

        let max = config.max_bedrooms.clamp(1, 9);

        Self {
            property,
            digit_bedrooms: Regex::new(&format!(
                r"\b([1-{max}])\s*(?:br|bhk|bedrooms?|bed)\b"
            ))
            .unwrap(),
            word_bedrooms: Regex::new(
                r"\b(one|two|three|four|five)\s*(?:br|bhk|bedrooms?|bed)\b",
            )
            .unwrap(),
            arabic_rooms: Regex::new(&format!(r"\b([1-{max}])\s*غرف(?:ة)?")).unwrap(),
            max_bedrooms: max,
        }
    }

    /// Returns the unit type for a message body.
    pub fn extract(&self, text: &str) -> UnitType {
        let lower = text.to_lowercase();

        // Property keywords win over bedroom counts
        for (unit, keywords) in &self.property {
            if keywords.iter().any(|k| lower.contains(k.as_str())) {
                return *unit;
            }
        }

        if let Some(caps) = self.digit_bedrooms.captures(&lower) {
            if let Some(n) = caps.get(1).and_then(|m| m.as_str().parse::<u8>().ok()) {
                return UnitType::Bedrooms(n);
            }
        }

        if let Some(caps) = self.word_bedrooms.captures(&lower) {
            let word = caps.get(1).map_or("", |m| m.as_str());
            if let Some((_, n)) = NUMBER_WORDS.iter().find(|(w, _)| *w == word) {
                if *n <= self.max_bedrooms {
                    return UnitType::Bedrooms(*n);
                }
            }
        }

        if let Some(caps) = self.arabic_rooms.captures(&lower) {
            if let Some(n) = caps.get(1).and_then(|m| m.as_str().parse::<u8>().ok()) {
                return UnitType::Bedrooms(n);
            }
        }

        for (phrase, n) in ARABIC_ROOM_PHRASES {
            if *n <= self.max_bedrooms && lower.contains(phrase) {
                return UnitType::Bedrooms(*n);
            }
        }

        UnitType::Unknown
    }
}
