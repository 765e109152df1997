//! Error handling for Navios
//!
//! This module defines the error type shared by the temporal engine,
//! configuration loading and the localization catalogs.

use thiserror::Error;

/// Main error type for the Navios engine
#[derive(Error, Debug)]
pub enum NaviosError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid date in {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Event has no start date: {event_id}")]
    Dateless { event_id: String },

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Navios operations
pub type Result<T> = std::result::Result<T, NaviosError>;

impl NaviosError {
    /// Check if the error is recoverable
    ///
    /// Data-quality errors on a single event are recoverable: the caller can
    /// drop that event and keep rendering the rest.
    pub fn is_recoverable(&self) -> bool {
        match self {
            NaviosError::Config(_) => false,
            NaviosError::ConfigLoad(_) => false,
            NaviosError::UnknownTimezone(_) => false,
            NaviosError::InvalidDate { .. } => true,
            NaviosError::Dateless { .. } => true,
            NaviosError::Translation(_) => false,
            NaviosError::InvalidInput(_) => true,
            NaviosError::Serialization(_) => false,
            NaviosError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            NaviosError::Config(_) => ErrorSeverity::Critical,
            NaviosError::ConfigLoad(_) => ErrorSeverity::Critical,
            NaviosError::UnknownTimezone(_) => ErrorSeverity::Critical,
            NaviosError::InvalidDate { .. } => ErrorSeverity::Warning,
            NaviosError::Dateless { .. } => ErrorSeverity::Warning,
            NaviosError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
