//! Span resolution and masking
//!
//! [`SpanResolver`] combines recognizer entities with pattern matches and
//! produces the masked text:
//!
//! 1. Recognizer spans with an accepted label become entities
//! 2. Pattern matches aligned to token boundaries become entities
//! 3. The document entity list is rebuilt with [`filter_spans`]
//! 4. All entity offsets are merged with [`merge_intervals`]
//! 5. Each merged interval is replaced by [`MASK_TOKEN`]
//!
//! ```rust
//! use std::sync::Arc;
//! use mascara::anonymization::detector::regex::RegexDetector;
//! use mascara::anonymization::recognizer::PatternOnlyRecognizer;
//! use mascara::anonymization::resolver::SpanResolver;
//!
//! let resolver = SpanResolver::new(
//!     Arc::new(PatternOnlyRecognizer::new()),
//!     Arc::new(RegexDetector::new()?),
//! );
//! let outcome = resolver.resolve("Meu CPF é 123.456.789-09")?;
//! assert_eq!(outcome.masked_text, "Meu CPF é ********");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod merge;

pub use merge::{filter_spans, merge_intervals};

use crate::anonymization::anonymizer::{redaction::RedactionStrategy, Anonymizer};
pub use crate::anonymization::anonymizer::MASK_TOKEN;
use crate::anonymization::detector::PiiDetector;
use crate::anonymization::models::{DetectionMethod, Entity, MergedInterval, PiiLabel, Span};
use crate::anonymization::recognizer::{Document, EntityRecognizer};
use crate::domain::Result;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Result of masking one text
#[derive(Debug, Clone)]
pub struct MaskOutcome {
    /// Input with every merged interval replaced by the mask token
    pub masked_text: String,
    /// Accepted recognizer entities, then aligned pattern matches in catalog order
    ///
    /// Not deduplicated: overlapping detections are all listed.
    pub entities_found: Vec<Entity>,
    /// Analysed document whose entities went through the longest-match filter
    pub document: Document,
    /// Merged intervals that were masked, sorted and disjoint
    pub intervals: Vec<MergedInterval>,
}

impl MaskOutcome {
    /// True when nothing was masked
    pub fn is_clean(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Combines an entity recognizer and a pattern detector into masked output
pub struct SpanResolver {
    recognizer: Arc<dyn EntityRecognizer>,
    detector: Arc<dyn PiiDetector>,
    accepted_labels: BTreeSet<PiiLabel>,
    masker: RedactionStrategy,
}

impl SpanResolver {
    /// Create a resolver accepting the default recognizer labels (PER, ORG, LOC, GPE)
    pub fn new(recognizer: Arc<dyn EntityRecognizer>, detector: Arc<dyn PiiDetector>) -> Self {
        Self {
            recognizer,
            detector,
            accepted_labels: PiiLabel::DEFAULT_ACCEPTED.into_iter().collect(),
            masker: RedactionStrategy::new(),
        }
    }

    /// Replace the set of recognizer labels that are masked
    pub fn with_accepted_labels(mut self, labels: impl IntoIterator<Item = PiiLabel>) -> Self {
        self.accepted_labels = labels.into_iter().collect();
        self
    }

    pub fn accepted_labels(&self) -> &BTreeSet<PiiLabel> {
        &self.accepted_labels
    }

    pub fn recognizer(&self) -> &dyn EntityRecognizer {
        self.recognizer.as_ref()
    }

    /// Detect and mask PII in `text`
    ///
    /// Finding nothing is not an error. Only a recognizer failure is.
    pub fn resolve(&self, text: &str) -> Result<MaskOutcome> {
        let mut document = self.recognizer.analyze(text)?;

        let mut entities_found = Vec::new();
        let mut raw = Vec::new();

        for span in document.ents() {
            if self.accepted_labels.contains(&span.label) {
                entities_found.push(Entity::from_span(
                    span,
                    document.span_text(span),
                    DetectionMethod::Ner,
                ));
                raw.push(span.interval());
            }
        }

        let mut candidates: Vec<Span> = document.ents().to_vec();
        for matched in self.detector.find_all(text) {
            match document.char_span(matched.start, matched.end, matched.label) {
                Some(aligned) => {
                    entities_found.push(Entity::from_span(
                        &aligned,
                        document.span_text(&aligned),
                        DetectionMethod::Regex,
                    ));
                    raw.push(aligned.interval());
                    candidates.push(aligned);
                }
                None => {
                    tracing::trace!(
                        start = matched.start,
                        end = matched.end,
                        label = %matched.label,
                        "Pattern match not aligned to token boundaries, skipped"
                    );
                }
            }
        }

        document.set_ents(filter_spans(candidates));

        let intervals = merge_intervals(raw);
        let masked_text = self.masker.apply(text, &intervals);

        tracing::trace!(
            recognizer = self.recognizer.name(),
            entities = entities_found.len(),
            intervals = intervals.len(),
            "Text resolved"
        );

        Ok(MaskOutcome {
            masked_text,
            entities_found,
            document,
            intervals,
        })
    }
}
