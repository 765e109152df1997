//! Event model

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::DefaultsConfig;
use crate::utils::errors::{NaviosError, Result};

/// An event as consumed by the temporal engine
///
/// `start_at`/`end_at` are authoritative when present; `event_date` and
/// `expire_date` are the legacy date-only bounds used as fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub expire_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub popularity_score: i64,
}

/// Event row as handed over by the data-access layer
///
/// Every timestamp column is nullable text; nothing has been parsed yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub start_at: Option<String>,
    #[serde(default)]
    pub end_at: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub expire_date: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub popularity_score: i64,
}

/// Lifecycle state of an event at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Live: `start <= now <= end`
    Today,
    Upcoming,
    Ended,
}

/// Everything a presentation layer needs about one event, derived from a
/// single `now`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub status: EventStatus,
    pub countdown: String,
    pub schedule: String,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Today => "today",
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ended => "ended",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = NaviosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" | "live" => Ok(EventStatus::Today),
            "upcoming" => Ok(EventStatus::Upcoming),
            "ended" => Ok(EventStatus::Ended),
            other => Err(NaviosError::InvalidInput(format!("Unknown event status: {}", other))),
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_calendar_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| NaviosError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parse an RFC 3339 timestamp with any offset
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| NaviosError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn parse_optional<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Result<T>,
) -> Result<Option<T>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse(v).map(Some),
    }
}

impl Event {
    /// Build an event from a persisted row
    ///
    /// Malformed timestamps are rejected. Legacy date columns are derived from
    /// the precise timestamps (local calendar date in `tz`) whenever those are
    /// present, so both representations agree. A missing end date falls back
    /// to the start date and a missing start date to the end date. Area and
    /// coordinates fall back to `defaults`.
    pub fn from_row(row: EventRow, tz: Tz, defaults: &DefaultsConfig) -> Result<Self> {
        let start_at = parse_optional(row.start_at.as_deref(), |v| parse_timestamp("startAt", v))?;
        let end_at = parse_optional(row.end_at.as_deref(), |v| parse_timestamp("endAt", v))?;
        let event_date = parse_optional(row.event_date.as_deref(), |v| parse_calendar_date("eventDate", v))?;
        let expire_date = parse_optional(row.expire_date.as_deref(), |v| parse_calendar_date("expireDate", v))?;

        // Precise timestamps are authoritative for the legacy columns
        let local_date = |at: DateTime<Utc>| at.with_timezone(&tz).date_naive();
        let event_date = start_at.map(local_date).or(event_date);
        let expire_date = end_at.map(local_date).or(expire_date);
        let event_date = event_date.or(expire_date);
        let expire_date = expire_date.or(event_date);

        let (latitude, longitude) = match (row.latitude, row.longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => (defaults.latitude, defaults.longitude),
        };

        let area = row
            .area
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| defaults.area_label.clone());

        Ok(Self {
            id: row.id,
            title: row.title,
            content: row.content,
            category: row.category,
            tags: row.tags,
            image_url: row.image_url,
            author: row.author,
            area: Some(area),
            latitude: Some(latitude),
            longitude: Some(longitude),
            start_at,
            end_at,
            event_date,
            expire_date,
            is_all_day: row.is_all_day,
            popularity_score: row.popularity_score,
        })
    }

    /// Case-insensitive category match
    pub fn has_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .map(|c| c.eq_ignore_ascii_case(category.trim()))
            .unwrap_or(false)
    }
}
