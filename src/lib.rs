//! Navios event temporal-status engine
//!
//! Derives whether a local event is live, upcoming or ended, renders
//! countdown and schedule text for map markers and detail pages, and ranks
//! popular past events. Loading events and rendering pages belong to the
//! surrounding application; this crate only computes.

pub mod config;
pub mod models;
pub mod engine;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{NaviosError, Result};

// Re-export main components for easy access
pub use engine::{TemporalEngine, EffectiveWindow, EventFilter, StatusCounts};
pub use models::{Event, EventRow, EventStatus, EventSummary};
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
