//! Logging configuration and setup
//! 
//! This module provides logging initialization and structured logging utilities
//! for registry commands and reports.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, RegistryError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held by the caller
/// for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match config.directory.as_deref() {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "campus-events.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| RegistryError::Config(format!("Failed to initialize logging: {}", e)))?;
        
    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of a registry command
pub fn log_registry_command<T>(command: &str, student_id: Option<i64>, event_id: Option<i64>, result: &Result<T>) {
    match result {
        Ok(_) => info!(
            command = command,
            student_id = student_id,
            event_id = event_id,
            "Registry command completed"
        ),
        Err(err) => match err.severity() {
            ErrorSeverity::Info => debug!(
                command = command,
                student_id = student_id,
                event_id = event_id,
                error = %err,
                "Registry command rejected"
            ),
            ErrorSeverity::Warning => warn!(
                command = command,
                student_id = student_id,
                event_id = event_id,
                error = %err,
                "Registry command rejected"
            ),
            _ => error!(
                command = command,
                student_id = student_id,
                event_id = event_id,
                error = %err,
                "Registry command failed"
            ),
        },
    }
}

/// Log a report query with its row count
pub fn log_report_query(report: &str, rows: usize) {
    debug!(
        report = report,
        rows = rows,
        "Report generated"
    );
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
