//! Regex-based PII detector

use super::{patterns::PatternCatalog, PiiDetector};
use crate::anonymization::models::{CharIndex, Span};
use anyhow::Result;
use std::sync::Arc;

/// Regex-based PII detector
#[derive(Debug, Clone)]
pub struct RegexDetector {
    catalog: Arc<PatternCatalog>,
}

impl RegexDetector {
    /// Create a new regex detector with the built-in catalog
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(PatternCatalog::builtin()?))
    }

    /// Create a new regex detector with a custom catalog
    pub fn with_catalog(catalog: PatternCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Create a detector sharing a catalog owned elsewhere
    pub fn from_shared(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }
}

impl PiiDetector for RegexDetector {
    fn find_all(&self, text: &str) -> Vec<Span> {
        let index = CharIndex::new(text);
        let mut spans = Vec::new();

        for pattern in self.catalog.all_patterns() {
            for matched in pattern.regex.find_iter(text) {
                if matched.start() == matched.end() {
                    continue;
                }
                // Regex offsets always sit on char boundaries
                if let (Some(start), Some(end)) =
                    (index.char_of(matched.start()), index.char_of(matched.end()))
                {
                    spans.push(Span::new(start, end, pattern.label));
                }
            }
        }

        spans
    }
}
