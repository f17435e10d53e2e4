//! Anonymization reporting
//!
//! This module provides a summary of a table anonymization run: cell and
//! entity counts, sample maskings, and warnings. It is printed after every
//! run and is the main output of dry-run mode.

use crate::anonymization::models::PiiLabel;
use crate::anonymization::resolver::MaskOutcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of samples kept in a report
const MAX_SAMPLES: usize = 20;

/// Maximum chars of original text kept in a sample
const MAX_SAMPLE_CHARS: usize = 50;

/// Report of a table anonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationReport {
    /// Whether cells were left unchanged
    pub dry_run: bool,

    /// Rows processed
    pub total_rows: usize,

    /// Text cells analysed
    pub cells_scanned: usize,

    /// Text cells containing at least one detection
    pub cells_masked: usize,

    /// Total entities found, overlapping detections included
    pub total_entities: usize,

    /// Entities by label
    pub entities_by_label: BTreeMap<PiiLabel, usize>,

    /// Sample maskings (before/after)
    pub samples: Vec<MaskingSample>,

    /// Warnings about the run
    pub warnings: Vec<String>,

    /// Wall-clock processing time (ms)
    pub processing_time_ms: u64,
}

/// Sample masking showing before/after
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingSample {
    /// Column name
    pub column: String,

    /// Row position, starting at 0
    pub row: usize,

    /// Original value (truncated)
    pub original: String,

    /// Masked value
    pub masked: String,

    /// Labels detected in the cell
    pub labels: Vec<PiiLabel>,
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

impl AnonymizationReport {
    /// Create a new empty report
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            total_rows: 0,
            cells_scanned: 0,
            cells_masked: 0,
            total_entities: 0,
            entities_by_label: BTreeMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            processing_time_ms: 0,
        }
    }

    /// Record the outcome of one text cell
    pub fn add_cell(&mut self, column: &str, row: usize, original: &str, outcome: &MaskOutcome) {
        self.cells_scanned += 1;

        if outcome.is_clean() {
            return;
        }

        self.cells_masked += 1;
        self.total_entities += outcome.entities_found.len();
        for entity in &outcome.entities_found {
            *self.entities_by_label.entry(entity.label).or_insert(0) += 1;
        }

        if self.samples.len() < MAX_SAMPLES {
            let mut labels: Vec<PiiLabel> = outcome.entities_found.iter().map(|e| e.label).collect();
            labels.sort();
            labels.dedup();

            self.samples.push(MaskingSample {
                column: column.to_string(),
                row,
                original: truncate_chars(original, MAX_SAMPLE_CHARS),
                masked: outcome.masked_text.clone(),
                labels,
            });
        }
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();
        let title = if self.dry_run {
            "               ANONYMIZATION DRY-RUN REPORT                    "
        } else {
            "                  ANONYMIZATION REPORT                         "
        };

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str(title);
        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Rows Processed:              {}\n", self.total_rows));
        output.push_str(&format!("  Text Cells Scanned:          {}\n", self.cells_scanned));
        output.push_str(&format!("  Cells With PII:              {}\n", self.cells_masked));
        output.push_str(&format!("  Total Entities Found:        {}\n", self.total_entities));
        output.push_str(&format!(
            "  Processing Time:             {} ms\n",
            self.processing_time_ms
        ));
        output.push('\n');

        if !self.entities_by_label.is_empty() {
            output.push_str("🔍 ENTITIES BY LABEL\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut labels: Vec<_> = self.entities_by_label.iter().collect();
            labels.sort_by(|a, b| b.1.cmp(a.1)); // count descending

            for (label, count) in labels {
                output.push_str(&format!("  {:30} {:>5}\n", label.key(), count));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE MASKINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            for (i, sample) in self.samples.iter().take(10).enumerate() {
                let labels: Vec<&str> = sample.labels.iter().map(PiiLabel::label).collect();
                output.push_str(&format!("\n  Sample #{}\n", i + 1));
                output.push_str(&format!("    Cell:      {} [row {}]\n", sample.column, sample.row));
                output.push_str(&format!("    Labels:    {}\n", labels.join(", ")));
                output.push_str(&format!("    Original:  \"{}\"\n", sample.original));
                output.push_str(&format!("    Masked:    \"{}\"\n", sample.masked));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {}\n", warning));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

impl Default for AnonymizationReport {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::models::{DetectionMethod, Entity, MergedInterval, Span};
    use crate::anonymization::recognizer::Document;

    fn outcome(original: &str, masked: &str, spans: &[Span]) -> MaskOutcome {
        MaskOutcome {
            masked_text: masked.to_string(),
            entities_found: spans
                .iter()
                .map(|s| Entity::from_span(s, String::new(), DetectionMethod::Regex))
                .collect(),
            document: Document::tokenized(original),
            intervals: spans.iter().map(Span::interval).collect::<Vec<MergedInterval>>(),
        }
    }

    #[test]
    fn test_report_creation() {
        let report = AnonymizationReport::new(true);
        assert!(report.dry_run);
        assert_eq!(report.cells_scanned, 0);
        assert!(report.entities_by_label.is_empty());
        assert!(report.samples.is_empty());
    }

    #[test]
    fn test_add_clean_cell() {
        let mut report = AnonymizationReport::default();
        report.add_cell("obs", 0, "nada", &outcome("nada", "nada", &[]));
        assert_eq!(report.cells_scanned, 1);
        assert_eq!(report.cells_masked, 0);
        assert!(report.samples.is_empty());
    }

    #[test]
    fn test_add_cell_with_pii() {
        let mut report = AnonymizationReport::default();
        let text = "Meu CPF é 123.456.789-09";
        report.add_cell(
            "obs",
            3,
            text,
            &outcome(text, "Meu CPF é ********", &[Span::new(10, 24, PiiLabel::TaxIdPrimary)]),
        );

        assert_eq!(report.cells_masked, 1);
        assert_eq!(report.total_entities, 1);
        assert_eq!(report.entities_by_label.get(&PiiLabel::TaxIdPrimary), Some(&1));
        assert_eq!(report.samples[0].row, 3);
        assert_eq!(report.samples[0].labels, vec![PiiLabel::TaxIdPrimary]);
    }

    #[test]
    fn test_samples_capped_and_truncated() {
        let mut report = AnonymizationReport::default();
        let text = "ã".repeat(80);
        let spans = [Span::new(0, 80, PiiLabel::Person)];
        for row in 0..30 {
            report.add_cell("nome", row, &text, &outcome(&text, "********", &spans));
        }

        assert_eq!(report.samples.len(), MAX_SAMPLES);
        assert_eq!(report.cells_masked, 30);
        assert_eq!(report.samples[0].original.chars().count(), MAX_SAMPLE_CHARS);
        assert!(report.samples[0].original.ends_with("..."));
    }

    #[test]
    fn test_format_console() {
        let mut report = AnonymizationReport::new(true);
        report.total_rows = 10;
        report.cells_scanned = 20;
        report.add_warning("coluna vazia".to_string());

        let output = report.format_console();
        assert!(output.contains("ANONYMIZATION DRY-RUN REPORT"));
        assert!(output.contains("Text Cells Scanned:          20"));
        assert!(output.contains("coluna vazia"));
    }

    #[test]
    fn test_format_json() {
        let mut report = AnonymizationReport::default();
        report.entities_by_label.insert(PiiLabel::Email, 2);
        let json = report.format_json().unwrap();
        assert!(json.contains("\"email\": 2"));
    }
}
