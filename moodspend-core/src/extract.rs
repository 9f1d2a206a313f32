//! Free-text purchase extraction.
//!
//! Understands sentences of the shape "I bought a(n) <item> for <amount>",
//! where the amount part is optional and may carry a `$` prefix and a
//! `k`/`K` thousands suffix.

use anyhow::Result;
use regex::Regex;

/// Item and amount pulled out of one user sentence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extracted {
    pub item: Option<String>,
    pub amount: Option<f64>,
}

pub struct Extractor {
    pattern: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        // Item: lazy run of word characters and spaces. The "for <amount>"
        // clause is optional; a tail that is not a valid amount (e.g.
        // "for friends", "for $$5") cannot satisfy it, so it either stays
        // part of the item or fails the whole match.
        let pattern = Regex::new(r"bought an? ([\w\s]+?)(?: for \$?(\d+(?:\.\d+)?)(k)?)?$")?;
        Ok(Self { pattern })
    }

    /// Extract (item, amount) from a free-text sentence.
    ///
    /// No "bought a ..." shape at all yields an empty result, which callers
    /// surface as "could not understand". An item without an amount is a
    /// valid partial result and triggers the ask-amount dialogue step.
    pub fn extract(&self, text: &str) -> Extracted {
        let text = text.to_lowercase();
        let text = text.trim().trim_end_matches(['.', '!']).trim_end();

        let Some(caps) = self.pattern.captures(text) else {
            return Extracted::default();
        };

        let item = caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .filter(|item| !item.is_empty());
        let amount = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .map(|n| if caps.get(3).is_some() { n * 1000.0 } else { n });

        Extracted { item, amount }
    }
}

/// Lenient standalone amount parser, used when the dialogue asks for the
/// missing amount: optional leading `$`, digits with an optional fraction,
/// optional `k`/`K` thousands suffix. Anything else is rejected.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim().to_lowercase();
    let text = text.strip_prefix('$').unwrap_or(&text);
    let (digits, multiplier) = match text.strip_suffix('k') {
        Some(rest) => (rest, 1000.0),
        None => (text, 1.0),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let value: f64 = digits.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::new().unwrap()
    }

    #[test]
    fn test_item_and_integer_amount() {
        let found = extractor().extract("I bought a phone for 900");
        assert_eq!(found.item.as_deref(), Some("phone"));
        assert_eq!(found.amount, Some(900.0));
    }

    #[test]
    fn test_k_suffix_multiplies() {
        let found = extractor().extract("I bought a tv for 2k");
        assert_eq!(found.amount, Some(2000.0));

        let found = extractor().extract("I bought a laptop for $1.5K");
        assert_eq!(found.item.as_deref(), Some("laptop"));
        assert_eq!(found.amount, Some(1500.0));
    }

    #[test]
    fn test_an_variant_and_trailing_punctuation() {
        let found = extractor().extract("I bought an umbrella for 15.");
        assert_eq!(found.item.as_deref(), Some("umbrella"));
        assert_eq!(found.amount, Some(15.0));
    }

    #[test]
    fn test_item_without_amount() {
        let found = extractor().extract("I bought a lamp");
        assert_eq!(found.item.as_deref(), Some("lamp"));
        assert_eq!(found.amount, None);
    }

    #[test]
    fn test_non_numeric_tail_stays_in_item() {
        let found = extractor().extract("I bought a coffee for friends");
        assert_eq!(found.item.as_deref(), Some("coffee for friends"));
        assert_eq!(found.amount, None);
    }

    #[test]
    fn test_no_pattern_at_all() {
        let found = extractor().extract("just browsing today");
        assert_eq!(found, Extracted::default());
    }

    #[test]
    fn test_malformed_amount_does_not_match() {
        let found = extractor().extract("I bought a thing for $$5");
        assert_eq!(found, Extracted::default());
    }

    #[test]
    fn test_parse_amount_accepts_lenient_forms() {
        assert_eq!(parse_amount("30"), Some(30.0));
        assert_eq!(parse_amount("$12.50"), Some(12.5));
        assert_eq!(parse_amount("2k"), Some(2000.0));
        assert_eq!(parse_amount(" $3K "), Some(3000.0));
    }

    #[test]
    fn test_parse_amount_rejects_junk() {
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1e5"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }
}
