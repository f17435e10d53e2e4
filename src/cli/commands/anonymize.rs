//! Anonymize command implementation
//!
//! Reads an `.xlsx` or `.csv` file, masks every text cell, prints a preview
//! and a report, and writes the result as `.xlsx`.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_INPUT};
use crate::anonymization::AnonymizationEngine;
use crate::config::load_config_or_default;
use crate::tabular::{self, preview::render_preview, XLSX_MIME};
use crate::{log_error_with_context, log_table_complete, log_table_start};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Spreadsheet to anonymize (.xlsx or .csv)
    pub file: PathBuf,

    /// Output workbook path (defaults to output.file_name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rows to show in the preview (overrides output.preview_rows)
    #[arg(long)]
    pub preview: Option<usize>,

    /// Detect and report without writing an output file
    #[arg(long)]
    pub dry_run: bool,

    /// Write the JSON report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let start = Instant::now();

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if self.dry_run {
            config.anonymization.dry_run = true;
        }
        let dry_run = config.anonymization.dry_run;

        let table = match tabular::read_table(&self.file) {
            Ok(table) => table,
            Err(e) if e.is_input_error() => {
                log_error_with_context!(e, "reading input file");
                eprintln!("❌ {e}");
                return Ok(EXIT_INPUT);
            }
            Err(e) => return Err(e).context("Failed to read input file"),
        };

        log_table_start!(self.file, table.row_count());

        let engine = match AnonymizationEngine::from_config(config.anonymization.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(EXIT_FATAL);
            }
        };

        let result = engine.anonymize_table(&table)?;

        let preview_rows = self.preview.unwrap_or(config.output.preview_rows);
        if preview_rows > 0 {
            println!("{}", render_preview(&result.table, preview_rows));
        }
        print!("{}", result.report.format_console());

        if let Some(ref report_path) = self.report {
            result
                .report
                .write_to_file(report_path)
                .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
            println!("📄 Report written to {}", report_path.display());
        }

        if dry_run {
            println!("ℹ️  Dry run: no output file written");
        } else {
            let output = self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.file_name));
            tabular::write_xlsx(&result.table, &output)?;
            println!("✅ Anonymized workbook saved: {} ({})", output.display(), XLSX_MIME);
        }

        log_table_complete!(result.report.cells_masked, start.elapsed());

        Ok(0)
    }
}
