//! Logging and observability
//!
//! Structured logging via `tracing`. Log events carry counts, labels and
//! offsets only; detected values are never logged.
//!
//! # Example
//!
//! ```no_run
//! use mascara::logging::init_logging;
//! use mascara::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(rows = 10, "Table loaded");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a table anonymization
///
/// # Example
///
/// ```no_run
/// use mascara::log_table_start;
///
/// let path = std::path::Path::new("clientes.xlsx");
/// log_table_start!(path, 120);
/// ```
#[macro_export]
macro_rules! log_table_start {
    ($path:expr, $rows:expr) => {
        tracing::info!(
            path = %$path.display(),
            rows = $rows,
            "Starting table anonymization"
        );
    };
}

/// Log the completion of a table anonymization
///
/// # Example
///
/// ```no_run
/// use mascara::log_table_complete;
/// use std::time::Duration;
///
/// let masked = 42;
/// let duration = Duration::from_millis(350);
/// log_table_complete!(masked, duration);
/// ```
#[macro_export]
macro_rules! log_table_complete {
    ($cells_masked:expr, $duration:expr) => {
        tracing::info!(
            cells_masked = $cells_masked,
            duration_ms = $duration.as_millis(),
            "Table anonymization completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use mascara::log_error_with_context;
///
/// let error = "workbook is encrypted";
/// log_error_with_context!(error, "reading input file");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
