//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`], which owns the pattern
//! catalog, the injected entity recognizer and the configuration, and masks
//! either a single text or every text cell of a [`Table`].
//!
//! # Examples
//!
//! ```no_run
//! use mascara::anonymization::{AnonymizationEngine, AnonymizationConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = AnonymizationEngine::from_config(AnonymizationConfig::default())?;
//!
//! let outcome = engine.mask_text("Meu CPF é 123.456.789-09")?;
//! assert_eq!(outcome.masked_text, "Meu CPF é ********");
//!
//! let table = mascara::tabular::read_table("clientes.csv")?;
//! let result = engine.anonymize_table(&table)?;
//! println!("{}", result.report.format_console());
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    config::{AnonymizationConfig, RecognizerKind},
    detector::{patterns::PatternCatalog, regex::RegexDetector},
    recognizer::{gazetteer::GazetteerRecognizer, EntityRecognizer, PatternOnlyRecognizer},
    report::AnonymizationReport,
    resolver::{MaskOutcome, SpanResolver},
};
use crate::tabular::{CellValue, Table};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Table with its masking report
#[derive(Debug, Clone)]
pub struct AnonymizedTable {
    /// Masked table (unchanged copy in dry-run mode)
    pub table: Table,
    /// Counts, samples and warnings
    pub report: AnonymizationReport,
}

/// Main anonymization engine
///
/// # Thread Safety
///
/// The engine is `Send + Sync`; the recognizer and detector are shared
/// behind `Arc`, so rows can be masked on the rayon pool.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    catalog: Arc<PatternCatalog>,
    resolver: SpanResolver,
}

/// Build the recognizer selected by the configuration
///
/// Failure here is fatal: there is no fallback recognizer.
pub fn build_recognizer(config: &AnonymizationConfig) -> Result<Arc<dyn EntityRecognizer>> {
    let recognizer: Arc<dyn EntityRecognizer> = match config.recognizer {
        RecognizerKind::Gazetteer => match config.gazetteer {
            Some(ref path) => Arc::new(GazetteerRecognizer::from_file(path)?),
            None => Arc::new(GazetteerRecognizer::builtin()?),
        },
        RecognizerKind::PatternsOnly => Arc::new(PatternOnlyRecognizer::new()),
    };

    tracing::info!(recognizer = recognizer.name(), "Entity recognizer loaded");
    Ok(recognizer)
}

impl AnonymizationEngine {
    /// Create an engine around an already constructed recognizer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - Pattern library file cannot be loaded or compiled
    pub fn new(config: AnonymizationConfig, recognizer: Arc<dyn EntityRecognizer>) -> Result<Self> {
        config
            .validate()
            .context("Invalid anonymization configuration")?;

        let catalog = match config.pattern_library {
            Some(ref path) => PatternCatalog::from_file(path)?,
            None => PatternCatalog::builtin()?,
        };
        let catalog = Arc::new(catalog);

        let detector = RegexDetector::from_shared(Arc::clone(&catalog));
        let resolver = SpanResolver::new(recognizer, Arc::new(detector))
            .with_accepted_labels(config.accepted_labels.iter().copied());

        tracing::debug!(
            patterns = catalog.len(),
            accepted_labels = ?config.accepted_labels,
            dry_run = config.dry_run,
            parallel = config.parallel,
            "Anonymization engine ready"
        );

        Ok(Self {
            config,
            catalog,
            resolver,
        })
    }

    /// Create an engine, building the recognizer from the configuration
    pub fn from_config(config: AnonymizationConfig) -> Result<Self> {
        let recognizer =
            build_recognizer(&config).context("Failed to initialize entity recognizer")?;
        Self::new(config, recognizer)
    }

    /// Detect and mask PII in a single text
    pub fn mask_text(&self, text: &str) -> Result<MaskOutcome> {
        Ok(self.resolver.resolve(text)?)
    }

    /// Mask every text cell of a table
    ///
    /// Non-text cells pass through untouched and row/column order is kept,
    /// whether or not rows are processed in parallel. In dry-run mode cells
    /// are analysed and reported but not changed.
    pub fn anonymize_table(&self, table: &Table) -> Result<AnonymizedTable> {
        let start = Instant::now();

        let process_row = |(index, row): (usize, &Vec<CellValue>)| -> Result<Vec<CellResult>> {
            row.iter()
                .map(|cell| self.mask_cell(cell))
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("Failed to mask row {}", index))
        };

        let processed: Vec<Vec<CellResult>> = if self.config.parallel {
            table
                .rows()
                .par_iter()
                .enumerate()
                .map(process_row)
                .collect::<Result<_>>()?
        } else {
            table
                .rows()
                .iter()
                .enumerate()
                .map(process_row)
                .collect::<Result<_>>()?
        };

        let mut report = AnonymizationReport::new(self.config.dry_run);
        report.total_rows = table.row_count();

        let mut rows = Vec::with_capacity(processed.len());
        for (row_index, (original_row, results)) in table.rows().iter().zip(processed).enumerate() {
            let mut row = Vec::with_capacity(results.len());
            for ((column, original), result) in table.columns().iter().zip(original_row).zip(results) {
                match result {
                    CellResult::Passthrough => row.push(original.clone()),
                    CellResult::Masked(outcome) => {
                        if let Some(text) = original.as_text() {
                            report.add_cell(column, row_index, text, &outcome);
                        }
                        if self.config.dry_run {
                            row.push(original.clone());
                        } else {
                            row.push(CellValue::String(outcome.masked_text));
                        }
                    }
                }
            }
            rows.push(row);
        }

        if table.is_empty() {
            report.add_warning("Table has no data rows".to_string());
        }
        report.processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            rows = report.total_rows,
            cells_scanned = report.cells_scanned,
            cells_masked = report.cells_masked,
            entities = report.total_entities,
            dry_run = self.config.dry_run,
            duration_ms = report.processing_time_ms,
            "Table anonymized"
        );

        Ok(AnonymizedTable {
            table: table.with_rows(rows),
            report,
        })
    }

    fn mask_cell(&self, cell: &CellValue) -> Result<CellResult> {
        match cell.as_text() {
            Some(text) => Ok(CellResult::Masked(Box::new(self.mask_text(text)?))),
            None => Ok(CellResult::Passthrough),
        }
    }

    /// Pattern catalog in use
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Name of the recognizer in use
    pub fn recognizer_name(&self) -> &str {
        self.resolver.recognizer().name()
    }

    pub fn config(&self) -> &AnonymizationConfig {
        &self.config
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}

enum CellResult {
    Passthrough,
    Masked(Box<MaskOutcome>),
}
