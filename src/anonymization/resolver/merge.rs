//! Span conflict resolution
//!
//! Two policies coexist and are applied to different outputs:
//! - [`filter_spans`]: longest match wins, for the entity list stored on the document
//! - [`merge_intervals`]: any overlap or contact merges, for masking

use crate::anonymization::models::{MergedInterval, Span};

/// Keep a non-overlapping subset of spans, preferring longer ones
///
/// Spans are considered by length (longest first), then by start (earliest
/// first); a span is kept when it shares no char with a span already kept.
/// The result is sorted by start. Exact duplicates keep their first occurrence.
pub fn filter_spans(spans: impl IntoIterator<Item = Span>) -> Vec<Span> {
    let mut candidates: Vec<Span> = spans.into_iter().collect();
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));

    let mut kept: Vec<Span> = Vec::with_capacity(candidates.len());
    for span in candidates {
        if !kept.iter().any(|k| k.overlaps(&span)) {
            kept.push(span);
        }
    }

    kept.sort_by_key(|s| s.start);
    kept
}

/// Collapse overlapping or touching intervals into maximal runs
///
/// Intervals are sorted by start; an interval whose start is at or before
/// the end of the current run extends it. The output is sorted and every
/// pair is separated by at least one char.
pub fn merge_intervals(intervals: impl IntoIterator<Item = MergedInterval>) -> Vec<MergedInterval> {
    let mut sorted: Vec<MergedInterval> = intervals.into_iter().collect();
    sorted.sort_by_key(|i| i.start);

    let mut merged: Vec<MergedInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => {
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }

    merged
}
