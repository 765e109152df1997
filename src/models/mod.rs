//! Data models module
//!
//! This module contains the data structures exchanged with the engine

pub mod event;

// Re-export commonly used models
pub use event::{Event, EventRow, EventStatus, EventSummary, parse_calendar_date, parse_timestamp};
