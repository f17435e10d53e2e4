//! Structured-identifier detection
//!
//! Provides a trait-based detection interface and the regex implementation
//! backed by the [`patterns::PatternCatalog`].

pub mod patterns;
pub mod regex;

use crate::anonymization::models::Span;

/// Trait for pattern-based detectors
pub trait PiiDetector: Send + Sync {
    /// Find every match in `text`, as char-offset spans
    ///
    /// Matches may overlap each other. Order follows the detector's own
    /// pattern order, then position.
    fn find_all(&self, text: &str) -> Vec<Span>;
}
