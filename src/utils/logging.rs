//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Navios engine.

use tracing::{debug, info, trace, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::models::EventStatus;
use crate::utils::errors::{NaviosError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the rolling file writer on drop and must be
/// held for the lifetime of the process when `file_path` is set.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .boxed()
    };

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "navios.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| NaviosError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a status classification
pub fn log_classification(event_id: &str, status: EventStatus) {
    trace!(
        event_id = event_id,
        status = %status,
        "Event classified"
    );
}

/// Log an event that could not be placed on the timeline
pub fn log_dateless_event(event_id: &str, context: &str, error: &str) {
    warn!(
        event_id = event_id,
        context = context,
        error = error,
        "Event skipped: no usable schedule"
    );
}

/// Log the outcome of an archive ranking pass
pub fn log_archive_ranking(candidates: usize, archived: usize, returned: usize, limit: usize) {
    debug!(
        candidates = candidates,
        archived = archived,
        returned = returned,
        limit = limit,
        "Archive ranking computed"
    );
}

/// Log a translation catalog load
pub fn log_catalog_loaded(language: &str, key_count: usize, source: &str) {
    info!(
        language = language,
        key_count = key_count,
        source = source,
        "Translation catalog loaded"
    );
}
