// 🧮 Amounts - Quantities attached to shopping list items
// Counts, weights (g/kg) and volumes (ml/l), normalized to base units

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quantity of a shopping list item, normalized to base units
/// (grams for weights, milliliters for volumes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amount {
    /// Plain piece count ("5 eggs")
    Count(u64),

    /// Weight in grams ("500g sugar", "1.5kg flour")
    Grams(u64),

    /// Volume in milliliters ("250ml cream", "2l milk")
    Millis(u64),
}

impl Amount {
    /// Parse a leading amount word from an input line.
    ///
    /// Accepts bare integers as counts and suffixed values for weight
    /// and volume. Fractional values are allowed and scaled into base
    /// units ("1.5kg" -> 1500 grams). Returns `None` for anything else;
    /// unparsable words are item-name text, never an error.
    pub fn parse(word: &str) -> Option<Amount> {
        Self::parse_unit(word, "kg", 1000.0, Amount::Grams)
            .or_else(|| Self::parse_unit(word, "g", 1.0, Amount::Grams))
            .or_else(|| Self::parse_unit(word, "ml", 1.0, Amount::Millis))
            .or_else(|| Self::parse_unit(word, "l", 1000.0, Amount::Millis))
            .or_else(|| word.parse::<u64>().ok().map(Amount::Count))
    }

    fn parse_unit(
        word: &str,
        suffix: &str,
        factor: f64,
        variant: fn(u64) -> Amount,
    ) -> Option<Amount> {
        let num = word.strip_suffix(suffix)?;
        num.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| variant((n * factor) as u64))
    }

    /// Sum two amounts of the same unit family. Mixed families
    /// (e.g. grams + milliliters) are not combinable, and neither are
    /// sums that would overflow; callers keep such entries separate.
    pub fn combine(self, other: Amount) -> Option<Amount> {
        match (self, other) {
            (Amount::Count(a), Amount::Count(b)) => a.checked_add(b).map(Amount::Count),
            (Amount::Grams(a), Amount::Grams(b)) => a.checked_add(b).map(Amount::Grams),
            (Amount::Millis(a), Amount::Millis(b)) => a.checked_add(b).map(Amount::Millis),
            _ => None,
        }
    }

    /// A bare count of one renders without any amount prefix.
    pub fn is_single(&self) -> bool {
        *self == Amount::Count(1)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Count(1)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Count(count) => write!(f, "{}", count),

            Amount::Grams(grams) => {
                if *grams < 1000 {
                    write!(f, "{}g", grams)
                } else {
                    write!(f, "{}kg", *grams as f64 / 1000.0)
                }
            }

            Amount::Millis(millis) => {
                if *millis < 1000 {
                    write!(f, "{}ml", millis)
                } else {
                    write!(f, "{}l", *millis as f64 / 1000.0)
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(Amount::parse("5"), Some(Amount::Count(5)));
        assert_eq!(Amount::parse("1"), Some(Amount::Count(1)));
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(Amount::parse("500g"), Some(Amount::Grams(500)));
        assert_eq!(Amount::parse("1.5kg"), Some(Amount::Grams(1500)));
        assert_eq!(Amount::parse("2kg"), Some(Amount::Grams(2000)));
    }

    #[test]
    fn test_parse_volume() {
        assert_eq!(Amount::parse("250ml"), Some(Amount::Millis(250)));
        assert_eq!(Amount::parse("2l"), Some(Amount::Millis(2000)));
        assert_eq!(Amount::parse("0.5l"), Some(Amount::Millis(500)));
    }

    #[test]
    fn test_parse_rejects_ordinary_words() {
        assert_eq!(Amount::parse("milk"), None);
        assert_eq!(Amount::parse("big"), None); // ends in 'g' but not a number
        assert_eq!(Amount::parse("ml"), None);
        assert_eq!(Amount::parse("-5"), None);
        assert_eq!(Amount::parse(""), None);
    }

    #[test]
    fn test_combine_same_family() {
        let sum = Amount::Grams(200).combine(Amount::Grams(1500));
        assert_eq!(sum, Some(Amount::Grams(1700)));

        let sum = Amount::Count(2).combine(Amount::Count(3));
        assert_eq!(sum, Some(Amount::Count(5)));

        let sum = Amount::Millis(500).combine(Amount::Millis(2000));
        assert_eq!(sum, Some(Amount::Millis(2500)));
    }

    #[test]
    fn test_combine_mixed_family_fails() {
        assert_eq!(Amount::Grams(500).combine(Amount::Millis(500)), None);
        assert_eq!(Amount::Count(1).combine(Amount::Grams(100)), None);
    }

    #[test]
    fn test_combine_overflow_fails() {
        assert_eq!(Amount::Count(u64::MAX).combine(Amount::Count(1)), None);
        assert_eq!(Amount::Grams(u64::MAX).combine(Amount::Grams(u64::MAX)), None);
        assert_eq!(Amount::Millis(u64::MAX).combine(Amount::Millis(1)), None);
        // Saturated but not overflowing still combines.
        assert_eq!(
            Amount::Count(u64::MAX - 1).combine(Amount::Count(1)),
            Some(Amount::Count(u64::MAX))
        );
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Amount::Count(3).to_string(), "3");
        assert_eq!(Amount::Grams(700).to_string(), "700g");
        assert_eq!(Amount::Grams(1700).to_string(), "1.7kg");
        assert_eq!(Amount::Millis(250).to_string(), "250ml");
        assert_eq!(Amount::Millis(2000).to_string(), "2l");
    }

    #[test]
    fn test_default_is_single() {
        assert!(Amount::default().is_single());
        assert!(!Amount::Count(2).is_single());
        assert!(!Amount::Grams(1).is_single());
    }
}
