//! Masking strategy module
//!
//! Applies a replacement over resolved intervals.

pub mod redaction;

use crate::anonymization::models::MergedInterval;

/// Fixed replacement for every merged interval
///
/// Width is independent of the masked text, so the original length is not revealed.
pub const MASK_TOKEN: &str = "********";

/// Trait for masking strategy implementations
pub trait Anonymizer: Send + Sync {
    /// Replace each interval of `text` (char offsets, sorted, disjoint)
    fn apply(&self, text: &str, intervals: &[MergedInterval]) -> String;
}
