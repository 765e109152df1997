//! Test helpers module
//!
//! Event builders, a fixed reference clock and engine construction shared by
//! the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Tokyo;
use navios::config::Settings;
use navios::{Event, TemporalEngine};

/// Instant from a Tokyo wall-clock time
pub fn jst(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Tokyo
        .with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
        .with_timezone(&Utc)
}

/// Reference "now" used across scenarios: 2026-02-14T12:00:00+09:00
pub fn reference_now() -> DateTime<Utc> {
    jst(2026, 2, 14, 12, 0, 0)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn secs(n: i64) -> Duration {
    Duration::seconds(n)
}

/// Engine with default settings (Asia/Tokyo, 24h grace, Japanese)
pub fn test_engine() -> TemporalEngine {
    TemporalEngine::from_settings(&Settings::default()).expect("Failed to create engine")
}

/// Fluent builder for test events
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            event: Event {
                id: id.to_string(),
                title: format!("Event {}", id),
                content: None,
                category: None,
                tags: vec![],
                image_url: None,
                author: None,
                area: None,
                latitude: None,
                longitude: None,
                start_at: None,
                end_at: None,
                event_date: None,
                expire_date: None,
                is_all_day: false,
                popularity_score: 0,
            },
        }
    }

    pub fn starts_at(mut self, at: DateTime<Utc>) -> Self {
        self.event.start_at = Some(at);
        self
    }

    pub fn ends_at(mut self, at: DateTime<Utc>) -> Self {
        self.event.end_at = Some(at);
        self
    }

    pub fn on_dates(mut self, event_date: NaiveDate, expire_date: NaiveDate) -> Self {
        self.event.event_date = Some(event_date);
        self.event.expire_date = Some(expire_date);
        self
    }

    pub fn all_day(mut self, is_all_day: bool) -> Self {
        self.event.is_all_day = is_all_day;
        self
    }

    pub fn popularity(mut self, score: i64) -> Self {
        self.event.popularity_score = score;
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.event.category = Some(category.to_string());
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// A mixed set of events around the reference clock
pub fn sample_events() -> Vec<Event> {
    vec![
        EventBuilder::new("market")
            .starts_at(jst(2026, 2, 14, 10, 0, 0))
            .ends_at(jst(2026, 2, 14, 17, 0, 0))
            .category("food")
            .popularity(30)
            .build(),
        EventBuilder::new("festival")
            .on_dates(date(2026, 2, 16), date(2026, 2, 16))
            .all_day(true)
            .category("Festival")
            .popularity(80)
            .build(),
        EventBuilder::new("concert")
            .starts_at(jst(2026, 2, 20, 18, 0, 0))
            .ends_at(jst(2026, 2, 20, 21, 0, 0))
            .category("music")
            .build(),
        EventBuilder::new("lantern")
            .on_dates(date(2026, 2, 1), date(2026, 2, 1))
            .category("festival")
            .popularity(50)
            .build(),
        EventBuilder::new("workshop")
            .on_dates(date(2026, 2, 5), date(2026, 2, 5))
            .category("food")
            .popularity(50)
            .build(),
        EventBuilder::new("late-night")
            .starts_at(jst(2026, 2, 13, 20, 0, 0))
            .ends_at(jst(2026, 2, 14, 0, 0, 0))
            .category("music")
            .popularity(99)
            .build(),
    ]
}
