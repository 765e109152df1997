//! Status/category filtering and feed ordering for sidebars and map markers

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::{Event, EventStatus};
use crate::utils::logging::log_dateless_event;
use super::window::{resolve_window, EffectiveWindow};

/// Optional status and category constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub category: Option<String>,
}

impl EventFilter {
    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

fn resolved<'a>(events: &'a [Event], tz: Tz, context: &str) -> Vec<(&'a Event, EffectiveWindow)> {
    events
        .iter()
        .filter_map(|event| match resolve_window(event, tz) {
            Ok(window) => Some((event, window)),
            Err(e) => {
                log_dateless_event(&event.id, context, &e.to_string());
                None
            }
        })
        .collect()
}

/// Keep events matching every constraint of `filter`, in input order
pub fn filter_events(events: &[Event], now: DateTime<Utc>, filter: &EventFilter, tz: Tz) -> Vec<Event> {
    resolved(events, tz, "filter")
        .into_iter()
        .filter(|(event, window)| {
            let status_ok = filter.status.map_or(true, |s| window.status_at(now) == s);
            let category_ok = filter
                .category
                .as_deref()
                .map_or(true, |c| event.has_category(c));
            status_ok && category_ok
        })
        .map(|(event, _)| event.clone())
        .collect()
}

/// Order events for a feed: live first, then upcoming by start ascending,
/// then ended by end descending
pub fn sort_for_feed(events: &[Event], now: DateTime<Utc>, tz: Tz) -> Vec<Event> {
    let mut entries: Vec<(&Event, EffectiveWindow, EventStatus)> = resolved(events, tz, "feed")
        .into_iter()
        .map(|(event, window)| (event, window, window.status_at(now)))
        .collect();

    entries.sort_by(|(_, a, a_status), (_, b, b_status)| {
        rank(*a_status).cmp(&rank(*b_status)).then_with(|| match a_status {
            EventStatus::Today => a.end.cmp(&b.end),
            EventStatus::Upcoming => a.start.cmp(&b.start),
            EventStatus::Ended => b.end.cmp(&a.end),
        })
    });

    entries.into_iter().map(|(event, _, _)| event.clone()).collect()
}

fn rank(status: EventStatus) -> u8 {
    match status {
        EventStatus::Today => 0,
        EventStatus::Upcoming => 1,
        EventStatus::Ended => 2,
    }
}

/// Count events per status
pub fn count_by_status(events: &[Event], now: DateTime<Utc>, tz: Tz) -> StatusCounts {
    resolved(events, tz, "count")
        .into_iter()
        .fold(StatusCounts::default(), |mut counts, (_, window)| {
            match window.status_at(now) {
                EventStatus::Today => counts.today += 1,
                EventStatus::Upcoming => counts.upcoming += 1,
                EventStatus::Ended => counts.ended += 1,
            }
            counts
        })
}

/// Per-status totals, e.g. for filter tab badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub today: usize,
    pub upcoming: usize,
    pub ended: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.today + self.upcoming + self.ended
    }

    pub fn get(&self, status: EventStatus) -> usize {
        match status {
            EventStatus::Today => self.today,
            EventStatus::Upcoming => self.upcoming,
            EventStatus::Ended => self.ended,
        }
    }
}
