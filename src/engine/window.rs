//! Effective window resolution and status classification

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::models::{Event, EventStatus};
use crate::utils::errors::{NaviosError, Result};

/// Resolved start/end instants of an event in local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl EffectiveWindow {
    /// Classify `now` against the window; both boundaries are inclusive
    pub fn status_at(&self, now: DateTime<Utc>) -> EventStatus {
        if now < self.start {
            EventStatus::Upcoming
        } else if now > self.end {
            EventStatus::Ended
        } else {
            EventStatus::Today
        }
    }

    /// Whether start and end fall on the same local calendar date
    pub fn is_single_day(&self) -> bool {
        self.start.date_naive() == self.end.date_naive()
    }
}

/// Resolve the window used for every status and text computation
///
/// Precise timestamps win over the legacy date columns; dates map to local
/// 00:00:00 (start) and 23:59:59 (end). A missing end closes at 23:59:59 of
/// the start date and a missing start opens at 00:00:00 of the end date. An
/// all-day event is then collapsed to whole local days even when precise
/// timestamps carry a time of day.
pub fn resolve_window(event: &Event, tz: Tz) -> Result<EffectiveWindow> {
    let start = match (event.start_at, event.event_date) {
        (Some(at), _) => Some(at.with_timezone(&tz)),
        (None, Some(date)) => Some(start_of_day(date, tz)?),
        (None, None) => None,
    };

    let end = match (event.end_at, event.expire_date) {
        (Some(at), _) => Some(at.with_timezone(&tz)),
        (None, Some(date)) => Some(end_of_day(date, tz)?),
        (None, None) => None,
    };

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => (start, end_of_day(start.date_naive(), tz)?),
        (None, Some(end)) => (start_of_day(end.date_naive(), tz)?.min(end), end),
        (None, None) => {
            return Err(NaviosError::Dateless { event_id: event.id.clone() });
        }
    };

    if event.is_all_day {
        return Ok(EffectiveWindow {
            start: start_of_day(start.date_naive(), tz)?,
            end: end_of_day(end.date_naive(), tz)?,
        });
    }

    Ok(EffectiveWindow { start, end })
}

/// Local 00:00:00 of `date`
pub fn start_of_day(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    localize(at_local_time(date, 0, 0, 0)?, tz)
}

/// Local 23:59:59 of `date`
pub fn end_of_day(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    localize(at_local_time(date, 23, 59, 59)?, tz)
}

fn at_local_time(date: NaiveDate, hour: u32, min: u32, sec: u32) -> Result<NaiveDateTime> {
    date.and_hms_opt(hour, min, sec).ok_or_else(|| NaviosError::InvalidDate {
        field: "localTime",
        value: date.to_string(),
    })
}

fn localize(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    // A wall-clock time skipped by a DST jump resolves to the first valid
    // instant after the gap.
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .ok_or_else(|| NaviosError::InvalidDate {
            field: "localTime",
            value: naive.to_string(),
        })
}
