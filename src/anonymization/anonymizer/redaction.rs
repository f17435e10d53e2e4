//! Redaction masking strategy

use super::{Anonymizer, MASK_TOKEN};
use crate::anonymization::models::{CharIndex, MergedInterval};

/// Redaction strategy - replaces each interval with one fixed token
#[derive(Debug, Clone)]
pub struct RedactionStrategy {
    token: String,
}

impl RedactionStrategy {
    /// Create a strategy emitting [`MASK_TOKEN`]
    pub fn new() -> Self {
        Self {
            token: MASK_TOKEN.to_string(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Default for RedactionStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Anonymizer for RedactionStrategy {
    fn apply(&self, text: &str, intervals: &[MergedInterval]) -> String {
        let index = CharIndex::new(text);
        let len = index.char_len();
        let mut masked = String::with_capacity(text.len());
        let mut last = 0;

        for interval in intervals {
            // clamp to the text and never step backwards
            let start = interval.start.clamp(last, len);
            let end = interval.end.clamp(start, len);

            masked.push_str(index.slice(last, start).unwrap_or_default());
            masked.push_str(&self.token);
            last = end;
        }

        masked.push_str(index.slice(last, len).unwrap_or_default());
        masked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction() {
        let strategy = RedactionStrategy::new();
        let masked = strategy.apply("Meu CPF é 123.456.789-09", &[MergedInterval::new(10, 24)]);
        assert_eq!(masked, "Meu CPF é ********");
    }

    #[test]
    fn test_redaction_multiple_intervals() {
        let strategy = RedactionStrategy::new();
        let masked = strategy.apply(
            "Ana e João",
            &[MergedInterval::new(0, 3), MergedInterval::new(6, 10)],
        );
        assert_eq!(masked, "******** e ********");
    }

    #[test]
    fn test_redaction_no_intervals() {
        let strategy = RedactionStrategy::new();
        assert_eq!(strategy.apply("nada aqui", &[]), "nada aqui");
        assert_eq!(strategy.apply("", &[]), "");
    }

    #[test]
    fn test_redaction_clamps_out_of_range() {
        let strategy = RedactionStrategy::new();
        let masked = strategy.apply("abc", &[MergedInterval::new(1, 50)]);
        assert_eq!(masked, "a********");
    }
}
