//! Entity recognition
//!
//! The recognizer is a capability: anything that can turn a text into a
//! tokenized [`Document`] with labeled spans. It is built once at startup and
//! injected into the engine, which lets tests substitute a fake.
//!
//! Two implementations ship with the crate:
//! - [`gazetteer::GazetteerRecognizer`]: rule-based recognizer for
//!   Brazilian Portuguese names, organizations and places
//! - [`PatternOnlyRecognizer`]: tokenizes only, so masking relies on the
//!   pattern catalog alone

pub mod gazetteer;
pub mod tokenizer;

use crate::anonymization::models::{CharIndex, PiiLabel, Span};
use crate::domain::Result;
use tokenizer::{tokenize, Token};

/// Trait for entity recognizer implementations
pub trait EntityRecognizer: Send + Sync {
    /// Short identifier shown in logs
    fn name(&self) -> &str;

    /// Tokenize `text` and label the entities found in it
    fn analyze(&self, text: &str) -> Result<Document>;
}

/// Analysed text: tokens plus labeled entity spans
///
/// Patterns can only contribute spans that line up with token boundaries,
/// see [`Document::char_span`].
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    ents: Vec<Span>,
}

impl Document {
    /// Build a document; tokens must be sorted and non-overlapping
    pub fn new(text: impl Into<String>, tokens: Vec<Token>, ents: Vec<Span>) -> Self {
        Self {
            text: text.into(),
            tokens,
            ents,
        }
    }

    /// Tokenize with the default tokenizer and attach no entities
    pub fn tokenized(text: &str) -> Self {
        Self::new(text, tokenize(text), Vec::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Entity spans currently attached to the document
    pub fn ents(&self) -> &[Span] {
        &self.ents
    }

    /// Replace the entity spans
    pub fn set_ents(&mut self, ents: Vec<Span>) {
        self.ents = ents;
    }

    /// Create a span only if it starts at a token start and ends at a token end
    ///
    /// Returns `None` for misaligned or out-of-range offsets. Regex matches
    /// that cut through a token are lost this way.
    pub fn char_span(&self, start: usize, end: usize, label: PiiLabel) -> Option<Span> {
        if start >= end {
            return None;
        }

        let starts_on_token = self
            .tokens
            .binary_search_by_key(&start, |t| t.start)
            .is_ok();
        let ends_on_token = self.tokens.binary_search_by_key(&end, |t| t.end).is_ok();

        (starts_on_token && ends_on_token).then(|| Span::new(start, end, label))
    }

    /// Text covered by a span
    pub fn span_text(&self, span: &Span) -> String {
        CharIndex::new(&self.text)
            .slice(span.start, span.end)
            .unwrap_or_default()
            .to_string()
    }
}

/// Recognizer that finds no entities
///
/// Used when `anonymization.recognizer = "patterns_only"`.
#[derive(Debug, Default, Clone)]
pub struct PatternOnlyRecognizer;

impl PatternOnlyRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for PatternOnlyRecognizer {
    fn name(&self) -> &str {
        "patterns_only"
    }

    fn analyze(&self, text: &str) -> Result<Document> {
        Ok(Document::tokenized(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_span_aligned() {
        let doc = Document::tokenized("Meu CPF é 123.456.789-09");
        let span = doc.char_span(10, 24, PiiLabel::TaxIdPrimary);
        assert_eq!(span, Some(Span::new(10, 24, PiiLabel::TaxIdPrimary)));
    }

    #[test]
    fn test_char_span_misaligned_start() {
        let doc = Document::tokenized("abc123 def");
        // "bc123" starts inside the first token
        assert!(doc.char_span(1, 6, PiiLabel::Email).is_none());
    }

    #[test]
    fn test_char_span_misaligned_end() {
        let doc = Document::tokenized("abc123 def");
        assert!(doc.char_span(0, 3, PiiLabel::Email).is_none());
        assert!(doc.char_span(0, 6, PiiLabel::Email).is_some());
    }

    #[test]
    fn test_char_span_rejects_empty_and_out_of_range() {
        let doc = Document::tokenized("abc");
        assert!(doc.char_span(0, 0, PiiLabel::Email).is_none());
        assert!(doc.char_span(0, 10, PiiLabel::Email).is_none());
    }

    #[test]
    fn test_span_text() {
        let doc = Document::tokenized("São Paulo");
        let span = Span::new(4, 9, PiiLabel::Location);
        assert_eq!(doc.span_text(&span), "Paulo");
    }

    #[test]
    fn test_pattern_only_recognizer() {
        let recognizer = PatternOnlyRecognizer::new();
        let doc = recognizer.analyze("Maria Silva").unwrap();
        assert!(doc.ents().is_empty());
        assert_eq!(doc.tokens().len(), 2);
    }
}
