//! Span and entity data models
//!
//! All offsets are counted in chars (Unicode scalar values), never bytes.

use super::label::PiiLabel;
use serde::{Deserialize, Serialize};

/// Half-open labeled character interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First char offset (inclusive)
    pub start: usize,
    /// Last char offset (exclusive)
    pub end: usize,
    /// Label assigned by the recognizer or the pattern catalog
    pub label: PiiLabel,
}

impl Span {
    /// Create a new span; `start` must be strictly less than `end`
    pub fn new(start: usize, end: usize, label: PiiLabel) -> Self {
        debug_assert!(start < end, "empty or inverted span {start}..{end}");
        Self { start, end, label }
    }

    /// Number of chars covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Spans are never empty; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if two spans share at least one char
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Drop the label
    pub fn interval(&self) -> MergedInterval {
        MergedInterval {
            start: self.start,
            end: self.end,
        }
    }
}

/// Unlabeled interval produced by merging overlapping or adjacent spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergedInterval {
    pub start: usize,
    pub end: usize,
}

impl MergedInterval {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How an entity was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Reported by the entity recognizer
    Ner,
    /// Matched by a pattern catalog entry
    Regex,
}

/// Detected PII occurrence, before masking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface text as it appears in the input
    pub text: String,
    /// Assigned label
    pub label: PiiLabel,
    /// Char offset of the first char
    pub start: usize,
    /// Char offset one past the last char
    pub end: usize,
    /// Detection method used
    pub detection_method: DetectionMethod,
}

impl Entity {
    /// Create an entity from a span and the text it covers
    pub fn from_span(span: &Span, text: String, detection_method: DetectionMethod) -> Self {
        Self {
            text,
            label: span.label,
            start: span.start,
            end: span.end,
            detection_method,
        }
    }

    /// Span this entity was derived from
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_overlap() {
        let a = Span::new(0, 10, PiiLabel::Person);
        let b = Span::new(5, 15, PiiLabel::Phone);
        let c = Span::new(10, 12, PiiLabel::Email);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_span_len_and_interval() {
        let span = Span::new(3, 8, PiiLabel::Email);
        assert_eq!(span.len(), 5);
        assert_eq!(span.interval(), MergedInterval::new(3, 8));
    }

    #[test]
    fn test_entity_from_span() {
        let span = Span::new(10, 24, PiiLabel::TaxIdPrimary);
        let entity = Entity::from_span(&span, "123.456.789-09".to_string(), DetectionMethod::Regex);
        assert_eq!(entity.label, PiiLabel::TaxIdPrimary);
        assert_eq!(entity.span(), span);
    }
}
